use crate::domain::constants::{HUMAN_TILE_ID, ROSTER_FILE_NAME, ROSTER_PAYLOAD_KEY};
use crate::domain::errors::DinoError;
use crate::domain::models::DinosaurRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RosterPayload {
    #[serde(rename = "Dinos")]
    dinos: Vec<DinosaurRecord>,
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn resolve_roster_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join(ROSTER_FILE_NAME)
    } else {
        p.to_path_buf()
    }
}

fn unavailable(cause: impl std::fmt::Display) -> DinoError {
    DinoError::DataUnavailable(cause.to_string())
}

fn fetch_roster_text(url: &str, timeout_ms: u64) -> Result<String, DinoError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(unavailable)?;
    let resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(unavailable)?;
    resp.text().map_err(unavailable)
}

fn read_roster_text(source: &str, timeout_ms: u64) -> Result<String, DinoError> {
    if is_remote(source) {
        log::debug!("fetching roster from {}", source);
        return fetch_roster_text(source, timeout_ms);
    }
    let file = resolve_roster_file(source);
    log::debug!("reading roster from {}", file.display());
    std::fs::read_to_string(&file).map_err(|e| unavailable(format!("{}: {}", file.display(), e)))
}

/// Parses the `{"Dinos": [...]}` payload and checks every record.
pub fn parse_roster(body: &str) -> Result<Vec<DinosaurRecord>, DinoError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(unavailable)?;
    if value.get(ROSTER_PAYLOAD_KEY).is_none() {
        return Err(unavailable(format!(
            "response has no {:?} key",
            ROSTER_PAYLOAD_KEY
        )));
    }
    let payload: RosterPayload = serde_json::from_value(value).map_err(unavailable)?;
    validate(&payload.dinos)?;
    Ok(payload.dinos)
}

pub fn load_roster(source: &str, timeout_ms: u64) -> anyhow::Result<Vec<DinosaurRecord>> {
    let body = read_roster_text(source, timeout_ms)?;
    let dinos = parse_roster(&body)?;
    log::info!("loaded {} dinosaurs from {}", dinos.len(), source);
    Ok(dinos)
}

pub fn validate(dinos: &[DinosaurRecord]) -> Result<(), DinoError> {
    let mut seen = HashSet::new();
    for d in dinos {
        // Tile ids are species names; this one belongs to the human tile.
        if d.species == HUMAN_TILE_ID {
            return Err(unavailable(format!(
                "species name {:?} is reserved",
                HUMAN_TILE_ID
            )));
        }
        if !seen.insert(d.species.as_str()) {
            return Err(unavailable(format!("duplicate species: {}", d.species)));
        }
        for (field, v) in [("weight", d.weight), ("height", d.height)] {
            if !(v.is_finite() && v > 0.0) {
                return Err(unavailable(format!(
                    "{} of {} must be positive, got {}",
                    field, d.species, v
                )));
            }
        }
    }
    Ok(())
}
