//! Map-layer queries over a finished level
//!
//! Entity placement and rendering read the grid through [`LevelMap`]. Who
//! occupies a cell is the caller's business, so the occupancy checks take a
//! predicate.

use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::dungeon::{CellType, Grid};
use crate::rng::DungeonRng;

/// Read-only view of one level of a [`Grid`]
#[derive(Debug, Clone, Copy)]
pub struct LevelMap<'a> {
    grid: &'a Grid,
    z: usize,
}

impl<'a> LevelMap<'a> {
    /// View level z; `None` past the bottom of the grid
    pub fn new(grid: &'a Grid, z: usize) -> Option<Self> {
        (z < grid.depth()).then_some(Self { grid, z })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell at (x, y); anything off the map is `Void`
    pub fn tile(&self, x: i32, y: i32) -> CellType {
        if x < 0 || y < 0 {
            return CellType::Void;
        }
        self.grid.get(x as usize, y as usize, self.z)
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_walkable()
    }

    pub fn blocks_light(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).blocks_light()
    }

    /// Plain floor with nobody on it; stairs and doors never qualify
    pub fn is_empty_floor(&self, x: i32, y: i32, occupied: impl Fn(usize, usize) -> bool) -> bool {
        self.tile(x, y) == CellType::Floor && !occupied(x as usize, y as usize)
    }

    /// Pick a random empty floor cell
    ///
    /// Samples at random first; if that keeps missing, falls back to a full
    /// scan. Returns `None` only when the level has no empty floor at all.
    pub fn random_floor_position(
        &self,
        rng: &mut DungeonRng,
        occupied: impl Fn(usize, usize) -> bool,
    ) -> Option<(usize, usize)> {
        let (width, height) = (self.width(), self.height());
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let (x, y) = rng.random_coord(width, height);
            if self.is_empty_floor(x as i32, y as i32, &occupied) {
                return Some((x, y));
            }
        }

        let candidates: Vec<(usize, usize)> = self
            .cells_of(CellType::Floor)
            .filter(|&(x, y)| !occupied(x, y))
            .collect();
        rng.choose(&candidates).copied()
    }

    /// Positions of every cell of one type, x-major
    pub fn cells_of(&self, cell: CellType) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.grid
            .iter_level(self.z)
            .filter(move |&(_, _, c)| c == cell)
            .map(|(x, y, _)| (x, y))
    }

    pub fn stairs_up(&self) -> Vec<(usize, usize)> {
        self.cells_of(CellType::StairsUp).collect()
    }

    pub fn stairs_down(&self) -> Vec<(usize, usize)> {
        self.cells_of(CellType::StairsDown).collect()
    }
}
