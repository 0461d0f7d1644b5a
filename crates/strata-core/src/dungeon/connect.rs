//! Stairway placement between adjacent levels
//!
//! For each boundary between level z and z+1 the resolver scans every column
//! (x outer, y inner). A column that is floor on both levels is an overlap
//! candidate keyed by its (region on z, region on z+1) pair. The first
//! candidate of each key becomes a stairway: `StairsDown` on level z and
//! `StairsUp` on level z+1. Selection is deterministic.

use hashbrown::HashSet;
use log::{debug, trace};

use super::region::{RegionGrid, RegionId};
use super::{CellType, Grid};

/// Ordered pair of regions joined by a stairway
///
/// `upper` is the region on level z (the `StairsDown` end), `lower` the
/// region on level z+1. Directional: (1, 2) and (2, 1) are different pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionPair {
    pub upper: Option<RegionId>,
    pub lower: Option<RegionId>,
}

/// One placed stairway pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stairway {
    pub x: usize,
    pub y: usize,
    /// Level holding the `StairsDown` end; `StairsUp` is on `z + 1`
    pub z: usize,
    pub regions: RegionPair,
}

/// Places stairways using the region grids of every level
#[derive(Debug)]
pub struct ConnectivityResolver<'a> {
    regions: &'a [RegionGrid],
}

impl<'a> ConnectivityResolver<'a> {
    /// `regions[z]` must label level z of the grid being resolved
    pub fn new(regions: &'a [RegionGrid]) -> Self {
        Self { regions }
    }

    /// Resolve every boundary in ascending z
    pub fn resolve(&self, grid: &mut Grid) -> Vec<Stairway> {
        let boundaries = grid.depth().min(self.regions.len()).saturating_sub(1);
        let mut stairways = Vec::new();
        for z in 0..boundaries {
            stairways.extend(self.resolve_boundary(grid, z));
        }
        stairways
    }

    /// Resolve the boundary between level z and level z+1
    ///
    /// Returns only the stairways placed by this call. Stairway pairs already
    /// present mark their region pair as connected, so resolving the same
    /// boundary twice places nothing the second time.
    pub fn resolve_boundary(&self, grid: &mut Grid, z: usize) -> Vec<Stairway> {
        let (Some(upper_regions), Some(lower_regions)) =
            (self.regions.get(z), self.regions.get(z + 1))
        else {
            return Vec::new();
        };
        if z + 1 >= grid.depth() {
            return Vec::new();
        }

        let mut seen: HashSet<RegionPair> = HashSet::new();
        let mut placed = Vec::new();

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let key = RegionPair {
                    upper: upper_regions.get(x, y),
                    lower: lower_regions.get(x, y),
                };

                match (grid.get(x, y, z), grid.get(x, y, z + 1)) {
                    (CellType::StairsDown, CellType::StairsUp) => {
                        seen.insert(key);
                    }
                    (CellType::Floor, CellType::Floor) => {
                        if !seen.insert(key) {
                            continue;
                        }
                        grid.set(x, y, z, CellType::StairsDown);
                        grid.set(x, y, z + 1, CellType::StairsUp);
                        trace!("stairway at ({x}, {y}) between levels {z} and {}", z + 1);
                        placed.push(Stairway {
                            x,
                            y,
                            z,
                            regions: key,
                        });
                    }
                    _ => {}
                }
            }
        }

        debug!(
            "boundary {}/{}: {} stairway(s) placed",
            z,
            z + 1,
            placed.len()
        );
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Room, label_regions};

    /// Two-level grid with floor on each listed rectangle
    fn two_levels(
        width: usize,
        height: usize,
        upper: &[Room],
        lower: &[Room],
    ) -> (Grid, Vec<RegionGrid>) {
        let mut grid = Grid::new(width, height, 2);
        for (z, rooms) in [upper, lower].into_iter().enumerate() {
            for room in rooms {
                for x in room.x1..=room.x2 {
                    for y in room.y1..=room.y2 {
                        grid.set(x, y, z, CellType::Floor);
                    }
                }
            }
        }
        let regions = vec![
            label_regions(width, height, upper),
            label_regions(width, height, lower),
        ];
        (grid, regions)
    }

    #[test]
    fn test_single_overlap_first_cell() {
        let (mut grid, regions) = two_levels(
            10,
            10,
            &[Room::new(2, 2, 6, 6)],
            &[Room::new(4, 3, 8, 8)],
        );
        let stairs = ConnectivityResolver::new(&regions).resolve(&mut grid);

        assert_eq!(stairs.len(), 1);
        let s = stairs[0];
        assert_eq!((s.x, s.y, s.z), (4, 3, 0));
        assert_eq!(s.regions.upper, RegionId::new(1));
        assert_eq!(s.regions.lower, RegionId::new(1));
        assert_eq!(grid.get(4, 3, 0), CellType::StairsDown);
        assert_eq!(grid.get(4, 3, 1), CellType::StairsUp);
    }

    #[test]
    fn test_x_is_outer_loop() {
        // Candidates at (5, 1) and (1, 5): x-major order picks (1, 5)
        let (mut grid, regions) = two_levels(
            8,
            8,
            &[Room::new(5, 1, 5, 1), Room::new(1, 5, 1, 5)],
            &[Room::new(1, 1, 6, 6)],
        );
        let stairs = ConnectivityResolver::new(&regions).resolve(&mut grid);
        assert_eq!(stairs.len(), 2);
        assert_eq!((stairs[0].x, stairs[0].y), (1, 5));
        assert_eq!(stairs[0].regions.upper, RegionId::new(2));
        assert_eq!((stairs[1].x, stairs[1].y), (5, 1));
    }

    #[test]
    fn test_corridor_overlap_is_keyed_by_no_region() {
        let (mut grid, regions) = two_levels(6, 3, &[], &[]);
        grid.set(2, 1, 0, CellType::Floor);
        grid.set(2, 1, 1, CellType::Floor);
        grid.set(3, 1, 0, CellType::Floor);
        grid.set(3, 1, 1, CellType::Floor);

        let stairs = ConnectivityResolver::new(&regions).resolve(&mut grid);
        assert_eq!(stairs.len(), 1);
        assert_eq!(
            stairs[0].regions,
            RegionPair {
                upper: None,
                lower: None
            }
        );
        assert_eq!(grid.get(3, 1, 0), CellType::Floor);
    }

    #[test]
    fn test_doors_are_not_candidates() {
        let room = [Room::new(1, 1, 3, 3)];
        let (mut grid, regions) = two_levels(5, 5, &room, &room);
        for x in 1..=3 {
            for y in 1..=3 {
                grid.set(x, y, 0, CellType::Door);
            }
        }
        let stairs = ConnectivityResolver::new(&regions).resolve(&mut grid);
        assert!(stairs.is_empty());
    }

    #[test]
    fn test_directional_keys() {
        // Level 0 rooms: A = 1 at x 1..2, B = 2 at x 4..5
        // Level 1 rooms: B' = 1 at x 4..5, A' = 2 at x 1..2
        // Keys (1, 2) and (2, 1) are distinct
        let (mut grid, regions) = two_levels(
            7,
            3,
            &[Room::new(1, 1, 2, 1), Room::new(4, 1, 5, 1)],
            &[Room::new(4, 1, 5, 1), Room::new(1, 1, 2, 1)],
        );
        let stairs = ConnectivityResolver::new(&regions).resolve(&mut grid);
        assert_eq!(stairs.len(), 2);
        assert_eq!(stairs[0].regions.upper, RegionId::new(1));
        assert_eq!(stairs[0].regions.lower, RegionId::new(2));
        assert_eq!(stairs[1].regions.upper, RegionId::new(2));
        assert_eq!(stairs[1].regions.lower, RegionId::new(1));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (mut grid, regions) = two_levels(
            12,
            12,
            &[Room::new(1, 1, 5, 5), Room::new(7, 1, 10, 10)],
            &[Room::new(1, 1, 10, 3), Room::new(1, 6, 10, 10)],
        );
        let resolver = ConnectivityResolver::new(&regions);
        let first = resolver.resolve(&mut grid);
        assert!(!first.is_empty());

        let snapshot = grid.clone();
        let second = resolver.resolve(&mut grid);
        assert!(second.is_empty());
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_missing_region_grid_places_nothing() {
        let room = [Room::new(1, 1, 3, 3)];
        let (mut grid, regions) = two_levels(5, 5, &room, &room);
        let stairs = ConnectivityResolver::new(&regions[..1]).resolve(&mut grid);
        assert!(stairs.is_empty());
        assert!(ConnectivityResolver::new(&regions).resolve_boundary(&mut grid, 1).is_empty());
    }
}
