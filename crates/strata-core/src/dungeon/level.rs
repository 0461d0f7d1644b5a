//! Per-level carving
//!
//! Turns one carver call into a level of cell types: open cells become floor,
//! everything else wall, then every door the rooms report is stamped over it.

use log::debug;

use crate::config::CarveParams;
use crate::error::BuildError;
use crate::rng::DungeonRng;

use super::carve::{RoomCarver, Terrain};
use super::{CellType, Room};

/// One carved level before regions and stairways
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedLevel {
    pub width: usize,
    pub height: usize,
    /// Row-major in y: index `y * width + x`
    pub cells: Vec<CellType>,
    /// Rooms in discovery order
    pub rooms: Vec<Room>,
}

impl CarvedLevel {
    pub fn get(&self, x: usize, y: usize) -> CellType {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            CellType::Void
        }
    }
}

/// Drives a [`RoomCarver`] for levels of a fixed size
#[derive(Debug)]
pub struct LevelCarver<'a, C: RoomCarver> {
    carver: &'a mut C,
    width: usize,
    height: usize,
    params: &'a CarveParams,
}

impl<'a, C: RoomCarver> LevelCarver<'a, C> {
    pub fn new(carver: &'a mut C, width: usize, height: usize, params: &'a CarveParams) -> Self {
        Self {
            carver,
            width,
            height,
            params,
        }
    }

    /// Carve one level
    ///
    /// Fails only if the carver breaks its contract: wrong map size, or a
    /// room or door outside the map.
    pub fn carve(&mut self, rng: &mut DungeonRng) -> Result<CarvedLevel, BuildError> {
        let (width, height) = (self.width, self.height);
        let carving = self.carver.carve(width, height, self.params, rng);

        if (carving.width(), carving.height()) != (width, height) {
            return Err(BuildError::CarvingSize {
                expected: (width, height),
                found: (carving.width(), carving.height()),
            });
        }

        let mut cells = vec![CellType::Wall; width * height];
        carving.for_each_cell(|x, y, terrain| {
            cells[y * width + x] = match terrain {
                Terrain::Wall => CellType::Wall,
                Terrain::Open => CellType::Floor,
            };
        });

        for room in carving.rooms() {
            if room.x2 >= width || room.y2 >= height {
                return Err(BuildError::RoomOutOfBounds { room: room.clone() });
            }
            if let Some(&(x, y)) = room
                .doors()
                .iter()
                .find(|&&(x, y)| x >= width || y >= height)
            {
                return Err(BuildError::DoorOutOfBounds { x, y });
            }
            room.for_each_door(|x, y| cells[y * width + x] = CellType::Door);
        }

        let rooms = carving.into_rooms();
        debug!(
            "carved level: {} room(s), {} door(s)",
            rooms.len(),
            rooms.iter().map(|r| r.doors().len()).sum::<usize>()
        );

        Ok(CarvedLevel {
            width,
            height,
            cells,
            rooms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Carving, UniformCarver};

    struct OneRoom(Room);

    impl RoomCarver for OneRoom {
        fn carve(
            &mut self,
            width: usize,
            height: usize,
            _params: &CarveParams,
            _rng: &mut DungeonRng,
        ) -> Carving {
            let mut carving = Carving::solid(width, height);
            carving.push_room(self.0.clone());
            carving
        }
    }

    struct WrongSize;

    impl RoomCarver for WrongSize {
        fn carve(
            &mut self,
            width: usize,
            height: usize,
            _params: &CarveParams,
            _rng: &mut DungeonRng,
        ) -> Carving {
            Carving::solid(width + 1, height)
        }
    }

    #[test]
    fn test_classification_and_doors() {
        let mut room = Room::new(2, 2, 4, 4);
        room.add_door(5, 3);
        let mut carver = OneRoom(room);
        let params = CarveParams::default();
        let mut rng = DungeonRng::new(1);

        let level = LevelCarver::new(&mut carver, 8, 8, &params)
            .carve(&mut rng)
            .unwrap();

        assert_eq!(level.get(2, 2), CellType::Floor);
        assert_eq!(level.get(4, 4), CellType::Floor);
        assert_eq!(level.get(1, 2), CellType::Wall);
        // Door stamped even though the carver left the cell as wall
        assert_eq!(level.get(5, 3), CellType::Door);
        assert_eq!(level.get(8, 0), CellType::Void);
        assert_eq!(level.rooms.len(), 1);
    }

    #[test]
    fn test_uniform_level() {
        let mut carver = UniformCarver;
        let params = CarveParams::default();
        let mut rng = DungeonRng::new(5);
        let level = LevelCarver::new(&mut carver, 50, 50, &params)
            .carve(&mut rng)
            .unwrap();

        let floors = level.cells.iter().filter(|&&c| c == CellType::Floor).count();
        let room_cells: usize = level.rooms.iter().map(Room::area).sum();
        assert!(floors >= room_cells);
        for room in &level.rooms {
            for &(x, y) in room.doors() {
                assert_eq!(level.get(x, y), CellType::Door);
            }
        }
    }

    #[test]
    fn test_wrong_size_rejected() {
        let params = CarveParams::default();
        let mut rng = DungeonRng::new(1);
        let err = LevelCarver::new(&mut WrongSize, 20, 20, &params)
            .carve(&mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::CarvingSize {
                expected: (20, 20),
                found: (21, 20)
            }
        );
    }

    #[test]
    fn test_room_outside_map_rejected() {
        let params = CarveParams::default();
        let mut rng = DungeonRng::new(1);
        let mut carver = OneRoom(Room::new(5, 5, 12, 7));
        let err = LevelCarver::new(&mut carver, 10, 10, &params)
            .carve(&mut rng)
            .unwrap_err();
        assert!(matches!(err, BuildError::RoomOutOfBounds { .. }));
    }

    #[test]
    fn test_door_outside_map_rejected() {
        let params = CarveParams::default();
        let mut rng = DungeonRng::new(1);
        let mut room = Room::new(1, 1, 3, 3);
        room.add_door(10, 2);
        let mut carver = OneRoom(room);
        let err = LevelCarver::new(&mut carver, 10, 10, &params)
            .carve(&mut rng)
            .unwrap_err();
        assert_eq!(err, BuildError::DoorOutOfBounds { x: 10, y: 2 });
    }
}
