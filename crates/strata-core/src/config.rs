//! Build configuration
//!
//! `BuildConfig` is plain data: it can be built in code, deserialized from
//! JSON (missing fields take their defaults), and is validated once before
//! any level is carved.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DEPTH, DEFAULT_DUG_PERCENTAGE, DEFAULT_HEIGHT, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN,
    DEFAULT_WIDTH, MAX_ROOM_ATTEMPTS,
};
use crate::error::{Axis, BuildError, ConfigError};

/// Inclusive size range for a room interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: Axis, limit: usize) -> Result<(), BuildError> {
        if self.min == 0 || self.min > self.max {
            return Err(BuildError::InvalidRoomRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        // Interior plus a wall on each side
        if self.max.saturating_add(2) > limit {
            return Err(BuildError::RoomTooLarge {
                axis,
                size: self.max,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_MIN, DEFAULT_ROOM_MAX)
    }
}

/// Parameters handed to the carving primitive for every level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarveParams {
    /// Stop placing rooms once this fraction of the inner area is dug
    pub dug_percentage: f32,
    pub room_width: SizeRange,
    pub room_height: SizeRange,
    pub max_room_attempts: u32,
}

impl Default for CarveParams {
    fn default() -> Self {
        Self {
            dug_percentage: DEFAULT_DUG_PERCENTAGE,
            room_width: SizeRange::default(),
            room_height: SizeRange::default(),
            max_room_attempts: MAX_ROOM_ATTEMPTS,
        }
    }
}

impl CarveParams {
    /// Check these parameters against a map of the given size
    pub fn validate(&self, width: usize, height: usize) -> Result<(), BuildError> {
        if !(self.dug_percentage > 0.0 && self.dug_percentage <= 1.0) {
            return Err(BuildError::InvalidDugPercentage(self.dug_percentage));
        }
        // At least one placement attempt, so every level gets a room
        if self.max_room_attempts == 0 {
            return Err(BuildError::NoRoomAttempts);
        }
        self.room_width.validate(Axis::Width, width)?;
        self.room_height.validate(Axis::Height, height)?;
        Ok(())
    }
}

/// Everything needed to build a dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Seed for the dungeon RNG; `None` draws one from entropy
    pub seed: Option<u64>,
    pub carve: CarveParams,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
            seed: None,
            carve: CarveParams::default(),
        }
    }
}

impl BuildConfig {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_carve(mut self, carve: CarveParams) -> Self {
        self.carve = carve;
        self
    }

    /// Reject dimensions and room ranges that cannot produce a dungeon
    pub fn validate(&self) -> Result<(), BuildError> {
        for (axis, value) in [
            (Axis::Width, self.width),
            (Axis::Height, self.height),
            (Axis::Depth, self.depth),
        ] {
            if value == 0 {
                return Err(BuildError::ZeroDimension { axis });
            }
        }
        if !self.fits_in_memory() {
            return Err(BuildError::TooLarge {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        self.carve.validate(self.width, self.height)
    }

    /// Level sides stay within `u32` and the cell count within `usize`
    fn fits_in_memory(&self) -> bool {
        let side_limit = u32::MAX as u64;
        self.width as u64 <= side_limit
            && self.height as u64 <= side_limit
            && self
                .width
                .checked_mul(self.height)
                .and_then(|cells| cells.checked_mul(self.depth))
                .is_some()
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
