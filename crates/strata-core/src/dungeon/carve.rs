//! Room-and-corridor carving primitive
//!
//! The builder only sees the [`RoomCarver`] trait: a carver returns a
//! [`Carving`] holding a wall/open classification for every cell and the rooms
//! it dug, each knowing its door cells. [`UniformCarver`] is the stock
//! implementation:
//! 1. Place rooms at random until the dug area reaches the target fraction
//! 2. Join consecutive rooms with L-shaped corridors
//! 3. Record every wall-ring cell a corridor opened as a door of that room

use log::trace;

use crate::config::CarveParams;
use crate::rng::DungeonRng;

use super::room::Room;

/// Raw classification reported by a carver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Wall,
    Open,
}

/// Output of one carver call
#[derive(Debug, Clone)]
pub struct Carving {
    width: usize,
    height: usize,
    terrain: Vec<Terrain>,
    rooms: Vec<Room>,
}

impl Carving {
    /// A map of solid rock with no rooms
    pub fn solid(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            terrain: vec![Terrain::Wall; width * height],
            rooms: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Classification at (x, y); outside the map is wall
    pub fn terrain(&self, x: usize, y: usize) -> Terrain {
        self.index(x, y).map_or(Terrain::Wall, |i| self.terrain[i])
    }

    /// Open a single cell; ignored outside the map
    pub fn dig(&mut self, x: usize, y: usize) {
        if let Some(i) = self.index(x, y) {
            self.terrain[i] = Terrain::Open;
        }
    }

    /// Open a room's interior and append it to the room list
    ///
    /// Rooms keep the order they are pushed in; that order is the discovery
    /// order used for region numbering.
    pub fn push_room(&mut self, room: Room) {
        for x in room.x1..=room.x2 {
            for y in room.y1..=room.y2 {
                self.dig(x, y);
            }
        }
        self.rooms.push(room);
    }

    /// Rooms in discovery order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }

    /// Visit every cell with its classification, x-major
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, Terrain)) {
        for x in 0..self.width {
            for y in 0..self.height {
                f(x, y, self.terrain[y * self.width + x]);
            }
        }
    }

    /// Record every opened wall-ring cell as a door of its room
    pub fn detect_doors(&mut self) {
        let (width, height) = (self.width, self.height);
        let terrain = &self.terrain;
        for room in &mut self.rooms {
            let lx = room.x1.saturating_sub(1);
            let ly = room.y1.saturating_sub(1);
            let hx = (room.x2 + 1).min(width - 1);
            let hy = (room.y2 + 1).min(height - 1);
            for x in lx..=hx {
                for y in ly..=hy {
                    if room.on_wall_ring(x, y) && terrain[y * width + x] == Terrain::Open {
                        room.add_door(x, y);
                    }
                }
            }
        }
    }
}

/// The carving primitive consumed by the level carver
pub trait RoomCarver {
    /// Carve one level of the given size
    ///
    /// Implementations must return a carving of exactly `width` x `height`
    /// whose rooms, wall rings included, lie inside the map and whose rooms
    /// do not overlap.
    fn carve(
        &mut self,
        width: usize,
        height: usize,
        params: &CarveParams,
        rng: &mut DungeonRng,
    ) -> Carving;
}

/// Uniformly scattered rooms joined by L-shaped corridors
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCarver;

impl RoomCarver for UniformCarver {
    fn carve(
        &mut self,
        width: usize,
        height: usize,
        params: &CarveParams,
        rng: &mut DungeonRng,
    ) -> Carving {
        let mut carving = Carving::solid(width, height);

        let inner_area = width.saturating_sub(2) * height.saturating_sub(2);
        let target = inner_area as f32 * params.dug_percentage;
        let mut dug = 0usize;

        for _ in 0..params.max_room_attempts {
            if dug as f32 >= target && !carving.rooms.is_empty() {
                break;
            }
            let Some(room) = random_room(width, height, params, rng) else {
                continue;
            };
            // Interiors must stay at least one wall apart
            if carving.rooms.iter().any(|r| room.overlaps(r, 1)) {
                continue;
            }
            dug += room.area();
            carving.push_room(room);
        }

        let centers: Vec<(usize, usize)> = carving
            .rooms
            .iter()
            .map(|room| room.random_point(rng))
            .collect();
        for pair in centers.windows(2) {
            dig_corridor(&mut carving, pair[0], pair[1], rng);
        }

        carving.detect_doors();
        trace!(
            "carved {} rooms ({} of {} cells dug) on a {}x{} map",
            carving.rooms.len(),
            dug,
            inner_area,
            width,
            height
        );
        carving
    }
}

/// Pick a room size and position with the wall ring inside the map
fn random_room(
    width: usize,
    height: usize,
    params: &CarveParams,
    rng: &mut DungeonRng,
) -> Option<Room> {
    let w = rng.range_inclusive(params.room_width.min, params.room_width.max);
    let h = rng.range_inclusive(params.room_height.min, params.room_height.max);
    if w + 2 > width || h + 2 > height {
        return None;
    }
    let x = rng.range_inclusive(1, width - w - 1);
    let y = rng.range_inclusive(1, height - h - 1);
    Some(Room::with_size(x, y, w, h))
}

/// Dig an L-shaped corridor between two interior points
fn dig_corridor(
    carving: &mut Carving,
    (ax, ay): (usize, usize),
    (bx, by): (usize, usize),
    rng: &mut DungeonRng,
) {
    // Horizontal leg first or vertical leg first
    let (cx, cy) = if rng.one_in(2) { (bx, ay) } else { (ax, by) };
    dig_line(carving, (ax, ay), (cx, cy));
    dig_line(carving, (cx, cy), (bx, by));
}

fn dig_line(carving: &mut Carving, (ax, ay): (usize, usize), (bx, by): (usize, usize)) {
    if ay == by {
        for x in ax.min(bx)..=ax.max(bx) {
            carving.dig(x, ay);
        }
    } else {
        for y in ay.min(by)..=ay.max(by) {
            carving.dig(ax, y);
        }
    }
}
