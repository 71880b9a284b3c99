//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide storage-agnostic entry points for callers (CLI, tests).
//!
//! # Invariants
//! - Services never bypass repository contracts with raw SQL.

pub mod catalog_service;
