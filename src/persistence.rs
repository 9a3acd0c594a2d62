//! Preference storage: the high score and the cosmetics record.
//!
//! Stores are best-effort.  Callers log failures and keep playing with the
//! in-memory values; nothing here can stop a tick.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::cosmetics::PlayerCosmetics;

pub const HIGH_SCORE_FILE: &str = "high_score.json";
pub const COSMETICS_FILE: &str = "cosmetics.json";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("preference i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("preference record is inconsistent: {0}")]
    Corrupt(String),
    #[error("preference store unavailable")]
    Unavailable,
}

pub trait PreferenceStore {
    /// `Ok(0)` when nothing has been stored yet.
    fn load_high_score(&self) -> Result<u32, PrefsError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), PrefsError>;
    /// `Ok(PlayerCosmetics::default())` when nothing has been stored yet.
    fn load_cosmetics(&self) -> Result<PlayerCosmetics, PrefsError>;
    fn save_cosmetics(&mut self, cosmetics: &PlayerCosmetics) -> Result<(), PrefsError>;
}

/// Everything read from a store at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub high_score: u32,
    pub cosmetics: PlayerCosmetics,
}

/// A cosmetics record is only trusted if it owns the default skin and wears
/// something it owns.
pub fn validate_cosmetics(cosmetics: PlayerCosmetics) -> Result<PlayerCosmetics, PrefsError> {
    if cosmetics.is_valid() {
        Ok(cosmetics)
    } else {
        Err(PrefsError::Corrupt(format!(
            "selected {} with unlocked {:?}",
            cosmetics.selected, cosmetics.unlocked
        )))
    }
}

/// Read both keys, substituting defaults for anything missing, unreadable or
/// inconsistent, whichever store it came from.
pub fn load_preferences<P: PreferenceStore>(store: &P) -> Preferences {
    let high_score = store.load_high_score().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "high score unavailable, starting from 0");
        0
    });
    let cosmetics = store
        .load_cosmetics()
        .and_then(validate_cosmetics)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "cosmetics unavailable, using defaults");
            PlayerCosmetics::default()
        });
    Preferences {
        high_score,
        cosmetics,
    }
}

// ── JSON files ────────────────────────────────────────────────────────────────

/// `~/.flappy_game/`, where preferences, config and the log live.
pub fn default_dir() -> Result<PathBuf, PrefsError> {
    let home = dirs::home_dir().ok_or(PrefsError::NoHomeDir)?;
    Ok(home.join(".flappy_game"))
}

/// One pretty-printed JSON file per key inside `dir`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>, PrefsError> {
        match fs::read_to_string(self.dir.join(filename)) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write<T: Serialize>(&self, filename: &str, value: &T) -> Result<(), PrefsError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(filename), json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn load_high_score(&self) -> Result<u32, PrefsError> {
        Ok(self.read(HIGH_SCORE_FILE)?.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PrefsError> {
        self.write(HIGH_SCORE_FILE, &score)
    }

    fn load_cosmetics(&self) -> Result<PlayerCosmetics, PrefsError> {
        Ok(self.read(COSMETICS_FILE)?.unwrap_or_default())
    }

    fn save_cosmetics(&mut self, cosmetics: &PlayerCosmetics) -> Result<(), PrefsError> {
        self.write(COSMETICS_FILE, cosmetics)
    }
}

// ── In memory ─────────────────────────────────────────────────────────────────

/// Volatile store.  With `available = false` every call fails, which is how
/// a missing or read-only backing store looks to the game.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    pub high_score: Option<u32>,
    pub cosmetics: Option<PlayerCosmetics>,
    pub available: bool,
    /// Successful saves, both keys.
    pub writes: u32,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore {
            high_score: None,
            cosmetics: None,
            available: true,
            writes: 0,
        }
    }
}

impl MemoryStore {
    pub fn unavailable() -> Self {
        MemoryStore {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_high_score(score: u32) -> Self {
        MemoryStore {
            high_score: Some(score),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), PrefsError> {
        if self.available {
            Ok(())
        } else {
            Err(PrefsError::Unavailable)
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load_high_score(&self) -> Result<u32, PrefsError> {
        self.check()?;
        Ok(self.high_score.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PrefsError> {
        self.check()?;
        self.high_score = Some(score);
        self.writes += 1;
        Ok(())
    }

    fn load_cosmetics(&self) -> Result<PlayerCosmetics, PrefsError> {
        self.check()?;
        Ok(self.cosmetics.clone().unwrap_or_default())
    }

    fn save_cosmetics(&mut self, cosmetics: &PlayerCosmetics) -> Result<(), PrefsError> {
        self.check()?;
        self.cosmetics = Some(cosmetics.clone());
        self.writes += 1;
        Ok(())
    }
}
