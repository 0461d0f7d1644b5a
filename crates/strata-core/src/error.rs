//! Construction errors
//!
//! Every error here is fatal to construction: there is no partial dungeon to
//! recover, so callers get the error back before or instead of a grid.

use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

use crate::dungeon::Room;

/// Grid axis named in dimension errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
    Depth,
}

/// Errors rejected by the builder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("dungeon {axis} must be positive")]
    ZeroDimension { axis: Axis },

    #[error("dungeon of {width}x{height}x{depth} cells is too large")]
    TooLarge {
        width: usize,
        height: usize,
        depth: usize,
    },

    #[error("room {axis} range {min}..={max} is empty or zero-sized")]
    InvalidRoomRange { axis: Axis, min: usize, max: usize },

    #[error("room {axis} of up to {size} plus walls does not fit a map {axis} of {limit}")]
    RoomTooLarge { axis: Axis, size: usize, limit: usize },

    #[error("dug percentage must be within (0, 1], got {0}")]
    InvalidDugPercentage(f32),

    #[error("max room attempts must be positive")]
    NoRoomAttempts,

    #[error("carver produced a {found:?} map, expected {expected:?}")]
    CarvingSize {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("carver produced a room outside the map: {room:?}")]
    RoomOutOfBounds { room: Room },

    #[error("carver produced a door outside the map at ({x}, {y})")]
    DoorOutOfBounds { x: usize, y: usize },
}

/// Errors raised while loading a [`BuildConfig`](crate::BuildConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] BuildError),
}
