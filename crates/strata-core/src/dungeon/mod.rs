//! Dungeon system
//!
//! Contains cells, the 3-D grid, rooms, the carving primitive, region
//! labeling, stairway placement and the builder tying them together.

mod builder;
mod carve;
mod cell;
mod connect;
mod grid;
mod level;
mod region;
mod room;

pub use builder::{Dungeon, DungeonBuilder, UnlinkedRoom, build};
pub use carve::{Carving, RoomCarver, Terrain, UniformCarver};
pub use cell::{CellType, Rgb, TileAttributes, TileFlags};
pub use connect::{ConnectivityResolver, RegionPair, Stairway};
pub use grid::Grid;
pub use level::{CarvedLevel, LevelCarver};
pub use region::{RegionGrid, RegionId, label_regions};
pub use room::Room;
