//! Rooms reported by the carving primitive

use crate::rng::DungeonRng;

/// Axis-aligned room interior on one level
///
/// Bounds are inclusive: the interior covers every x in `x1..=x2` and every
/// y in `y1..=y2`. The wall ring sits one cell outside those bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
    doors: Vec<(usize, usize)>,
}

impl Room {
    /// Create a room from inclusive corner coordinates
    ///
    /// Corners are normalised so that `x1 <= x2` and `y1 <= y2`.
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
            doors: Vec::new(),
        }
    }

    /// Create a room from its top-left corner and interior size
    pub fn with_size(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::new(
            x,
            y,
            x + width.saturating_sub(1),
            y + height.saturating_sub(1),
        )
    }

    pub fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }

    /// Get room area (interior cells)
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Get center point of room
    pub fn center(&self) -> (usize, usize) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Check if point is inside the room interior
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Check if point is on the room's wall ring (corners included)
    pub fn on_wall_ring(&self, x: usize, y: usize) -> bool {
        let lx = self.x1.wrapping_sub(1);
        let ly = self.y1.wrapping_sub(1);
        let in_x = x + 1 >= self.x1 && x <= self.x2 + 1;
        let in_y = y + 1 >= self.y1 && y <= self.y2 + 1;
        in_x && in_y && (x == lx || x == self.x2 + 1 || y == ly || y == self.y2 + 1)
    }

    /// Check if this room comes within `buffer` cells of another
    ///
    /// With a buffer of 1 two rooms may share a wall but their interiors
    /// never touch.
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        !(self.x2 + buffer < other.x1
            || other.x2 + buffer < self.x1
            || self.y2 + buffer < other.y1
            || other.y2 + buffer < self.y1)
    }

    /// Check if the room and its wall ring fit inside a map
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.x1 >= 1 && self.y1 >= 1 && self.x2 + 1 < width && self.y2 + 1 < height
    }

    /// Get a random point inside the room
    pub fn random_point(&self, rng: &mut DungeonRng) -> (usize, usize) {
        (
            rng.range_inclusive(self.x1, self.x2),
            rng.range_inclusive(self.y1, self.y2),
        )
    }

    /// Record a door cell; duplicates are ignored
    pub fn add_door(&mut self, x: usize, y: usize) {
        if !self.doors.contains(&(x, y)) {
            self.doors.push((x, y));
        }
    }

    /// Door cells in the order they were recorded
    pub fn doors(&self) -> &[(usize, usize)] {
        &self.doors
    }

    /// Enumerate door cells through a callback
    pub fn for_each_door(&self, mut f: impl FnMut(usize, usize)) {
        for &(x, y) in &self.doors {
            f(x, y);
        }
    }
}
