//! JSON save file for `Progress`
//!
//! Loading never fails from the player's point of view: a missing file is
//! created with defaults, an unreadable one is overwritten with defaults.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::log::{info, warn};
use thiserror::Error;

use crate::progress::Progress;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("save file format: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `DEEP_MINE_SAVE_PATH`, else `<config dir>/deep-mine/save.json`
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("DEEP_MINE_SAVE_PATH") {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("deep-mine");
        path.push("save.json");
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// strict read: surfaces every failure
    pub fn try_load(&self) -> Result<Progress, SaveError> {
        let bytes = fs::read(&self.path)?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
        let progress: Progress = serde_json::from_slice(body)?;
        Ok(progress.sanitized())
    }

    /// forgiving read: falls back to (and persists) defaults
    pub fn load(&self) -> Progress {
        match self.try_load() {
            Ok(progress) => progress,
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("no save at {}, starting fresh", self.path.display());
                self.reset_to_defaults()
            }
            Err(e) => {
                warn!("discarding unreadable save {}: {e}", self.path.display());
                self.reset_to_defaults()
            }
        }
    }

    pub fn save(&self, progress: &Progress) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn reset_to_defaults(&self) -> Progress {
        let defaults = Progress::default();
        if let Err(e) = self.save(&defaults) {
            warn!("could not write default save {}: {e}", self.path.display());
        }
        defaults
    }
}
