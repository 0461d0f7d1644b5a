//! Per-level region labeling
//!
//! Every room on a level gets a region id, numbered from 1 in the order the
//! carver discovered the rooms. Region grids only live while a dungeon is
//! being built.

use std::fmt;
use std::num::NonZeroU32;

use super::Room;

/// Identifier of one room's interior on one level
///
/// Ids are unique within a level only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// Region id for the room at `index` in discovery order
    pub fn from_room_index(index: usize) -> Self {
        let n = u32::try_from(index + 1).unwrap_or(u32::MAX);
        Self(NonZeroU32::new(n).unwrap_or(NonZeroU32::MAX))
    }

    /// Build a region id from its 1-based number; `None` for 0
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Index of the owning room in the level's room list
    pub fn room_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Region id per (x, y) of one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGrid {
    width: usize,
    height: usize,
    regions: Vec<Option<RegionId>>,
}

impl RegionGrid {
    /// A grid with no regions assigned
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            regions: vec![None; width * height],
        }
    }

    /// Region at (x, y); `None` for corridors, walls and outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<RegionId> {
        if x < self.width && y < self.height {
            self.regions[y * self.width + x]
        } else {
            None
        }
    }

    /// Stamp a room's rectangle, clipped to the grid
    fn stamp(&mut self, room: &Room, id: RegionId) {
        let x2 = room.x2.min(self.width.saturating_sub(1));
        let y2 = room.y2.min(self.height.saturating_sub(1));
        for x in room.x1..=x2 {
            for y in room.y1..=y2 {
                self.regions[y * self.width + x] = Some(id);
            }
        }
    }
}

/// Label every room of a level with its discovery index
///
/// Later rooms overwrite earlier ones where rectangles overlap.
pub fn label_regions(width: usize, height: usize, rooms: &[Room]) -> RegionGrid {
    let mut grid = RegionGrid::new(width, height);
    for (index, room) in rooms.iter().enumerate() {
        if room.x1 >= width || room.y1 >= height {
            continue;
        }
        grid.stamp(room, RegionId::from_room_index(index));
    }
    grid
}
