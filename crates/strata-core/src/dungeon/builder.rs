//! Dungeon construction
//!
//! Carves and labels each level in turn, then links every pair of adjacent
//! levels with stairways. Construction is one synchronous pass; the finished
//! [`Dungeon`] is read-only.

use log::{debug, info, warn};

use crate::config::{BuildConfig, CarveParams};
use crate::error::BuildError;
use crate::map::LevelMap;
use crate::rng::DungeonRng;

use super::carve::{RoomCarver, UniformCarver};
use super::connect::{ConnectivityResolver, Stairway};
use super::level::LevelCarver;
use super::region::{RegionGrid, RegionId, label_regions};
use super::{Grid, Room};

/// A room that no stairway reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlinkedRoom {
    pub z: usize,
    pub region: RegionId,
}

/// A finished dungeon
#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: Grid,
    rooms: Vec<Vec<Room>>,
    stairways: Vec<Stairway>,
    unlinked: Vec<UnlinkedRoom>,
}

impl Dungeon {
    /// The finished cell grid
    pub fn tiles(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn depth(&self) -> usize {
        self.grid.depth()
    }

    /// Rooms of level z in discovery order; empty past the bottom level
    pub fn rooms(&self, z: usize) -> &[Room] {
        self.rooms.get(z).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every stairway, ordered by level then scan order
    pub fn stairways(&self) -> &[Stairway] {
        &self.stairways
    }

    /// Rooms with no stairway up or down
    ///
    /// Nothing is done about them; a dungeon deeper than one level may leave
    /// some rooms reachable only through their own level's corridors.
    pub fn unlinked_rooms(&self) -> &[UnlinkedRoom] {
        &self.unlinked
    }

    /// Map-layer view of level z
    pub fn level(&self, z: usize) -> Option<LevelMap<'_>> {
        LevelMap::new(&self.grid, z)
    }
}

/// Builds dungeons from a [`BuildConfig`] and a carving primitive
#[derive(Debug, Clone)]
pub struct DungeonBuilder<C: RoomCarver = UniformCarver> {
    config: BuildConfig,
    carver: C,
}

impl DungeonBuilder<UniformCarver> {
    pub fn new(config: BuildConfig) -> Self {
        Self::with_carver(config, UniformCarver)
    }
}

impl<C: RoomCarver> DungeonBuilder<C> {
    pub fn with_carver(config: BuildConfig, carver: C) -> Self {
        Self { config, carver }
    }

    /// Build with an RNG seeded from the config, or from entropy
    pub fn build_seeded(self) -> Result<(Dungeon, u64), BuildError> {
        let mut rng = self
            .config
            .seed
            .map_or_else(DungeonRng::from_entropy, DungeonRng::new);
        let seed = rng.seed();
        self.build(&mut rng).map(|dungeon| (dungeon, seed))
    }

    /// Build a dungeon
    ///
    /// The config is validated before anything is carved.
    pub fn build(mut self, rng: &mut DungeonRng) -> Result<Dungeon, BuildError> {
        self.config.validate()?;
        let BuildConfig {
            width,
            height,
            depth,
            ..
        } = self.config;
        info!(
            "building {}x{}x{} dungeon (seed {})",
            width,
            height,
            depth,
            rng.seed()
        );

        let mut grid = Grid::new(width, height, depth);
        let mut rooms = Vec::with_capacity(depth);
        let mut regions: Vec<RegionGrid> = Vec::with_capacity(depth);

        let mut carver = LevelCarver::new(&mut self.carver, width, height, &self.config.carve);
        for z in 0..depth {
            let level = carver.carve(rng)?;
            debug!("level {}: {} room(s)", z, level.rooms.len());
            regions.push(label_regions(width, height, &level.rooms));
            grid.fill_level(z, &level.cells);
            rooms.push(level.rooms);
        }

        let stairways = ConnectivityResolver::new(&regions).resolve(&mut grid);
        let unlinked = find_unlinked(&rooms, &stairways);

        info!(
            "placed {} stairway(s) between {} level(s)",
            stairways.len(),
            depth
        );
        if !unlinked.is_empty() {
            warn!("{} room(s) have no stairway", unlinked.len());
        }

        Ok(Dungeon {
            grid,
            rooms,
            stairways,
            unlinked,
        })
    }
}

/// Build a `width` x `height` x `depth` dungeon with the stock carver
pub fn build(
    width: usize,
    height: usize,
    depth: usize,
    params: &CarveParams,
    rng: &mut DungeonRng,
) -> Result<Dungeon, BuildError> {
    let config = BuildConfig::new(width, height, depth).with_carve(params.clone());
    DungeonBuilder::new(config).build(rng)
}

fn find_unlinked(rooms: &[Vec<Room>], stairways: &[Stairway]) -> Vec<UnlinkedRoom> {
    if rooms.len() < 2 {
        return Vec::new();
    }
    let mut linked: Vec<Vec<bool>> = rooms.iter().map(|r| vec![false; r.len()]).collect();
    for stairway in stairways {
        if let Some(id) = stairway.regions.upper {
            linked[stairway.z][id.room_index()] = true;
        }
        if let Some(id) = stairway.regions.lower {
            linked[stairway.z + 1][id.room_index()] = true;
        }
    }

    let mut unlinked = Vec::new();
    for (z, level) in linked.iter().enumerate() {
        for (index, _) in level.iter().enumerate().filter(|&(_, &l)| !l) {
            unlinked.push(UnlinkedRoom {
                z,
                region: RegionId::from_room_index(index),
            });
        }
    }
    unlinked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{CellType, RegionPair};
    use crate::error::Axis;

    #[test]
    fn test_build_dimensions() {
        let mut rng = DungeonRng::new(42);
        let dungeon = build(40, 30, 3, &CarveParams::default(), &mut rng).unwrap();
        assert_eq!(dungeon.width(), 40);
        assert_eq!(dungeon.height(), 30);
        assert_eq!(dungeon.depth(), 3);
        assert_eq!(dungeon.tiles().depth(), 3);
        for z in 0..3 {
            assert!(!dungeon.rooms(z).is_empty());
        }
        assert!(dungeon.rooms(3).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_carving() {
        let mut rng = DungeonRng::new(42);
        let err = build(40, 30, 0, &CarveParams::default(), &mut rng).unwrap_err();
        assert_eq!(err, BuildError::ZeroDimension { axis: Axis::Depth });
    }

    #[test]
    fn test_zero_room_attempts_rejected() {
        let params = CarveParams {
            max_room_attempts: 0,
            ..CarveParams::default()
        };
        let mut rng = DungeonRng::new(42);
        assert_eq!(
            build(20, 20, 2, &params, &mut rng).unwrap_err(),
            BuildError::NoRoomAttempts
        );
    }

    #[test]
    fn test_stairways_match_grid() {
        let mut rng = DungeonRng::new(3);
        let dungeon = build(50, 50, 4, &CarveParams::default(), &mut rng).unwrap();
        let grid = dungeon.tiles();
        for s in dungeon.stairways() {
            assert_eq!(grid.get(s.x, s.y, s.z), CellType::StairsDown);
            assert_eq!(grid.get(s.x, s.y, s.z + 1), CellType::StairsUp);
        }
        let downs: usize = (0..4).map(|z| grid.count(z, CellType::StairsDown)).sum();
        assert_eq!(downs, dungeon.stairways().len());
    }

    #[test]
    fn test_build_seeded_reports_seed() {
        let config = BuildConfig::new(30, 30, 2).with_seed(77);
        let (a, seed) = DungeonBuilder::new(config.clone()).build_seeded().unwrap();
        let (b, _) = DungeonBuilder::new(config).build_seeded().unwrap();
        assert_eq!(seed, 77);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_find_unlinked() {
        let rooms = vec![
            vec![Room::new(1, 1, 2, 2), Room::new(4, 1, 5, 2)],
            vec![Room::new(1, 1, 2, 2)],
        ];
        let stairways = vec![Stairway {
            x: 1,
            y: 1,
            z: 0,
            regions: RegionPair {
                upper: RegionId::new(1),
                lower: RegionId::new(1),
            },
        }];
        let unlinked = find_unlinked(&rooms, &stairways);
        assert_eq!(
            unlinked,
            vec![UnlinkedRoom {
                z: 0,
                region: RegionId::new(2).unwrap()
            }]
        );
        assert!(find_unlinked(&rooms[..1], &[]).is_empty());
    }
}
