//! Spawn settings loaded from `ingot_config.json5`.

use std::{fs, io, path::Path};

use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/ingot_config.json5");

/// Largest accepted `spawn_radius`.
pub const MAX_SPAWN_RADIUS: u32 = 1024;

/// Errors raised while loading the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("config io failed: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid json5 for [`SpawnConfig`].
    #[error("config could not be parsed: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings for the spawn searches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Blocks around the world spawn over which joining players are spread.
    pub spawn_radius: u32,
    /// Chunk rings searched around the spawn chunk when picking the initial spawn.
    pub spawn_chunk_search_radius: u8,
    /// Enables [`crate::spawn::DebugVoidTerrain`].
    pub debug_void_terrain: bool,
}

impl SpawnConfig {
    /// Parses and validates a json5 document.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, writing the default file first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let source = fs::read_to_string(path)?;
            return Self::from_json5(&source);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_radius > MAX_SPAWN_RADIUS {
            return Err(ConfigError::Invalid("Spawn radius must be at most 1024"));
        }
        if !(1..=32).contains(&self.spawn_chunk_search_radius) {
            return Err(ConfigError::Invalid(
                "Spawn chunk search radius must be in range 1..32",
            ));
        }
        Ok(())
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            spawn_radius: 10,
            spawn_chunk_search_radius: 5,
            debug_void_terrain: false,
        }
    }
}
