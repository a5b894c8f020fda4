//! Level Registry
//!
//! Read-only lookup table over the built-in level set.

use thiserror::Error;

use crate::config::LevelConfig;
use crate::table::builtin_levels;

/// Lowest playable level
pub const MIN_LEVEL: u8 = 1;
/// Highest playable level
pub const MAX_LEVEL: u8 = 7;
/// Reserved pseudo-level for the all-levels-complete certificate
pub const CERTIFICATE_LEVEL: u8 = 8;

/// Requested level number outside the configured range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid level: {0}")]
pub struct InvalidLevel(pub u8);

/// Immutable registry of all level configurations, indexed by level number
#[derive(Debug)]
pub struct LevelRegistry {
    levels: Vec<LevelConfig>,
}

impl LevelRegistry {
    /// Build the registry from the built-in table
    pub fn builtin() -> Self {
        let levels = builtin_levels();
        debug_assert!(
            levels
                .iter()
                .enumerate()
                .all(|(i, l)| l.level == MIN_LEVEL + i as u8),
            "level table must be contiguous from MIN_LEVEL"
        );
        Self { levels }
    }

    /// Look up one level
    pub fn get(&self, level: u8) -> Result<&LevelConfig, InvalidLevel> {
        if level < MIN_LEVEL {
            return Err(InvalidLevel(level));
        }
        self.levels
            .get((level - MIN_LEVEL) as usize)
            .ok_or(InvalidLevel(level))
    }

    /// All levels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
