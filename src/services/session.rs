//! Session state: the last submitted human and fetched roster, kept in a
//! key/value store so the grid can be redrawn without resubmitting.

use crate::domain::constants::{DINOS_DIGEST_KEY, DINOS_KEY, HUMAN_KEY, SESSION_SCHEMA_VERSION};
use crate::domain::errors::DinoError;
use crate::domain::models::{DinosaurRecord, HumanRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Durable string key/value storage, read and written wholesale.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct HumanBlob {
    schema_version: u32,
    human: HumanRecord,
}

#[derive(Serialize, Deserialize)]
struct DinosBlob {
    schema_version: u32,
    dinos: Vec<DinosaurRecord>,
}

fn digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

fn corrupt(key: &str, cause: impl std::fmt::Display) -> DinoError {
    DinoError::StorageCorrupt(format!("{}: {}", key, cause))
}

fn check_version(key: &str, raw: &str) -> Result<(), DinoError> {
    #[derive(Deserialize)]
    struct Versioned {
        schema_version: Option<u32>,
    }
    let v: Versioned = serde_json::from_str(raw).map_err(|e| corrupt(key, e))?;
    match v.schema_version {
        Some(SESSION_SCHEMA_VERSION) => Ok(()),
        Some(other) => Err(corrupt(
            key,
            format!("unsupported schema version {}", other),
        )),
        None => Err(corrupt(key, "missing schema version")),
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, DinoError> {
    check_version(key, raw)?;
    serde_json::from_str(raw).map_err(|e| corrupt(key, e))
}

pub fn save(
    store: &mut dyn KeyValueStore,
    human: &HumanRecord,
    dinos: &[DinosaurRecord],
) -> anyhow::Result<()> {
    let human_raw = serde_json::to_string(&HumanBlob {
        schema_version: SESSION_SCHEMA_VERSION,
        human: human.clone(),
    })?;
    let dinos_raw = serde_json::to_string(&DinosBlob {
        schema_version: SESSION_SCHEMA_VERSION,
        dinos: dinos.to_vec(),
    })?;
    store.set(DINOS_DIGEST_KEY, digest(&dinos_raw))?;
    store.set(DINOS_KEY, dinos_raw)?;
    store.set(HUMAN_KEY, human_raw)?;
    log::debug!("session saved ({} dinosaurs)", dinos.len());
    Ok(())
}

pub fn load(
    store: &dyn KeyValueStore,
) -> anyhow::Result<Option<(HumanRecord, Vec<DinosaurRecord>)>> {
    let human_raw = store.get(HUMAN_KEY)?;
    let dinos_raw = store.get(DINOS_KEY)?;
    let (human_raw, dinos_raw) = match (human_raw, dinos_raw) {
        (None, None) => return Ok(None),
        (Some(h), Some(d)) => (h, d),
        (Some(_), None) => return Err(corrupt(DINOS_KEY, "missing").into()),
        (None, Some(_)) => return Err(corrupt(HUMAN_KEY, "missing").into()),
    };

    if let Some(expected) = store.get(DINOS_DIGEST_KEY)? {
        if expected != digest(&dinos_raw) {
            return Err(corrupt(DINOS_KEY, "digest mismatch").into());
        }
    } else {
        return Err(corrupt(DINOS_DIGEST_KEY, "missing").into());
    }

    let human: HumanBlob = decode(HUMAN_KEY, &human_raw)?;
    let dinos: DinosBlob = decode(DINOS_KEY, &dinos_raw)?;
    Ok(Some((human.human, dinos.dinos)))
}

pub fn clear(store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
    store.remove(HUMAN_KEY)?;
    store.remove(DINOS_KEY)?;
    store.remove(DINOS_DIGEST_KEY)?;
    log::debug!("session cleared");
    Ok(())
}
