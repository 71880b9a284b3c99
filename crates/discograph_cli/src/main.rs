//! Demo CLI for the Discograph catalog.
//!
//! # Responsibility
//! - Exercise `discograph_core` end to end against a real database file:
//!   optionally seed the demo fixture, then print every artist with its
//!   albums.
//!
//! Usage: `discograph [--seed] <database-path>`

use discograph_core::{
    core_version, default_log_level, fixture, init_logging, CatalogService,
    SqliteAlbumRepository, SqliteArtistRepository,
};
use log::info;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut seed = false;
    let mut db_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--seed" {
            seed = true;
        } else if db_path.is_none() {
            db_path = Some(arg);
        } else {
            eprintln!("unexpected argument `{arg}`");
            return usage();
        }
    }
    let Some(db_path) = db_path else {
        return usage();
    };

    if let Ok(log_dir) = std::env::var("DISCOGRAPH_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    match run(seed, &db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(seed: bool, db_path: &str) -> Result<(), Box<dyn Error>> {
    if seed {
        fixture::reset(db_path)?;
        info!("event=fixture_reset module=cli status=ok db_path={db_path}");
    }

    let service = CatalogService::new(
        SqliteArtistRepository::new(db_path),
        SqliteAlbumRepository::new(db_path),
    );

    for (artist, albums) in service.discography()? {
        println!("{}", artist.name);
        for album in albums {
            println!("  - {}", album.title);
        }
    }

    Ok(())
}

fn usage() -> ExitCode {
    eprintln!("usage: discograph [--seed] <database-path>");
    ExitCode::FAILURE
}
