//! Catalog domain model.
//!
//! # Responsibility
//! - Define the value objects mapped to/from store rows.
//!
//! # Invariants
//! - Identity (`ArtistId`/`AlbumId`) is assigned by the store, never by
//!   application code.
//! - An `Album` carrying the unsaved sentinel id has no store row yet.

pub mod album;
pub mod artist;
