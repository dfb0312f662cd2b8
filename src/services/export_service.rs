//! Backup export: every league document bundled into a single zip archive.

use std::io::{Cursor, Write};

use serde::Serialize;
use tracing::info;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{
    dao::models::LeagueSnapshot, dto::week::WeekResponse, error::ServiceError, state::SharedState,
};

/// File name suggested to clients downloading the archive.
pub const EXPORT_FILE_NAME: &str = "beer_die_backup.zip";

/// Snapshot the league and pack it as a zip archive.
pub async fn export_archive(state: &SharedState) -> Result<Vec<u8>, ServiceError> {
    let snapshot = state.read_league(|league| league.snapshot()).await;
    let archive = build_archive(&snapshot)?;
    info!(bytes = archive.len(), "league export built");
    Ok(archive)
}

/// Pack `players.json`, `teams.json`, `games.json` and `current_week.json`, each pretty-printed
/// exactly as the store writes them.
pub fn build_archive(snapshot: &LeagueSnapshot) -> Result<Vec<u8>, ServiceError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    write_entry(&mut zip, "players.json", &snapshot.players)?;
    write_entry(&mut zip, "teams.json", &snapshot.teams)?;
    write_entry(&mut zip, "games.json", &snapshot.games)?;
    write_entry(
        &mut zip,
        "current_week.json",
        &WeekResponse::from(snapshot.current_week),
    )?;

    Ok(zip.finish()?.into_inner())
}

fn write_entry<T>(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    document: &T,
) -> Result<(), ServiceError>
where
    T: ?Sized + Serialize,
{
    let payload = serde_json::to_vec_pretty(document)?;
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)?;
    zip.write_all(&payload)
        .map_err(|err| ServiceError::Archive(err.into()))?;
    Ok(())
}
