//! Default build parameters
//!
//! A fresh game uses a 50x50 map, ten levels deep.

/// Map dimensions
pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;
pub const DEFAULT_DEPTH: usize = 10;

/// Fraction of the inner map area dug out as room interiors
pub const DEFAULT_DUG_PERCENTAGE: f32 = 0.15;

/// Room interior size limits (inclusive)
pub const DEFAULT_ROOM_MIN: usize = 5;
pub const DEFAULT_ROOM_MAX: usize = 10;

/// Room placement attempts per level before giving up on the dug target
pub const MAX_ROOM_ATTEMPTS: u32 = 200;

/// Random samples tried before falling back to a full floor scan
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;
