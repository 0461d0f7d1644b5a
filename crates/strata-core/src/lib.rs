//! strata-core: multi-level dungeon builder
//!
//! Builds a stack of 2-D levels of rooms and corridors and links vertically
//! adjacent levels with stairway pairs. The crate performs no I/O apart from
//! loading a [`BuildConfig`] from a JSON file.

pub mod dungeon;
pub mod map;

mod config;
mod consts;
mod error;
mod rng;

pub use config::{BuildConfig, CarveParams, SizeRange};
pub use consts::*;
pub use dungeon::{Dungeon, DungeonBuilder, build};
pub use error::{Axis, BuildError, ConfigError};
pub use rng::DungeonRng;
