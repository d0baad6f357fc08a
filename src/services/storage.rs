use crate::domain::errors::DinoError;
use crate::domain::models::Page;
use crate::services::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("dinogrid"))
}

fn storage_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("storage.json"))
}

fn page_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("page.json"))
}

fn write_atomic(path: &Path, contents: String) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(tmp, path)?;
    Ok(())
}

/// Key/value storage backed by one JSON object file, scoped to the user.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(storage_path()?)
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                DinoError::StorageCorrupt(format!("{}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> anyhow::Result<()> {
        write_atomic(&self.path, serde_json::to_string_pretty(&self.entries)?)
    }

    /// Drops an unreadable storage file and starts over empty.
    pub fn reset(path: PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(Self {
            path,
            entries: BTreeMap::new(),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Opens the user's store; an unreadable file is discarded and reported.
pub fn open_store() -> anyhow::Result<(FileStore, Option<DinoError>)> {
    match FileStore::open_default() {
        Ok(store) => Ok((store, None)),
        Err(e) => match e.downcast::<DinoError>() {
            Ok(err @ DinoError::StorageCorrupt(_)) => {
                log::warn!("{}", err);
                Ok((FileStore::reset(storage_path()?)?, Some(err)))
            }
            Ok(other) => Err(other.into()),
            Err(e) => Err(e),
        },
    }
}

fn read_page(path: &Path) -> anyhow::Result<(Page, Option<DinoError>)> {
    if !path.exists() {
        return Ok((Page::default(), None));
    }
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(page) => Ok((page, None)),
        Err(e) => {
            let err = DinoError::StorageCorrupt(format!("{}: {}", path.display(), e));
            log::warn!("{}", err);
            Ok((Page::default(), Some(err)))
        }
    }
}

/// Loads the last shown page; an unreadable file yields a fresh page and the error.
pub fn load_page() -> anyhow::Result<(Page, Option<DinoError>)> {
    read_page(&page_path()?)
}

pub fn save_page(page: &Page) -> anyhow::Result<()> {
    let mut persisted = page.clone();
    persisted.notice = None;
    write_atomic(&page_path()?, serde_json::to_string_pretty(&persisted)?)
}
