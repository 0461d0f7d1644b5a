//! Dense 3-D cell grid

use super::CellType;

/// Cell types for every (x, y, z) of a dungeon
///
/// Stored as one flat buffer, level after level, each level row-major in y.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    depth: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a grid filled with walls
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            cells: vec![CellType::Wall; width * height * depth],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Check if (x, y, z) lies inside the grid
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        self.in_bounds(x, y, z)
            .then(|| (z * self.height + y) * self.width + x)
    }

    /// Cell type at (x, y, z), or `Void` outside the grid
    pub fn get(&self, x: usize, y: usize, z: usize) -> CellType {
        self.index(x, y, z).map_or(CellType::Void, |i| self.cells[i])
    }

    /// Set the cell at (x, y, z); returns false outside the grid
    pub(crate) fn set(&mut self, x: usize, y: usize, z: usize, cell: CellType) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// One level's cells, row-major in y
    pub fn level(&self, z: usize) -> Option<&[CellType]> {
        let len = self.width * self.height;
        (z < self.depth).then(|| &self.cells[z * len..(z + 1) * len])
    }

    /// Overwrite one level with a carved level of the same size
    pub(crate) fn fill_level(&mut self, z: usize, cells: &[CellType]) {
        let len = self.width * self.height;
        debug_assert_eq!(cells.len(), len);
        self.cells[z * len..(z + 1) * len].copy_from_slice(cells);
    }

    /// Count cells of one type on a level
    pub fn count(&self, z: usize, cell: CellType) -> usize {
        self.level(z)
            .map_or(0, |level| level.iter().filter(|&&c| c == cell).count())
    }

    /// Iterate (x, y, cell) over one level, x-major
    pub fn iter_level(&self, z: usize) -> impl Iterator<Item = (usize, usize, CellType)> + '_ {
        let (width, height) = (self.width, self.height);
        let depth = self.depth;
        (0..width)
            .flat_map(move |x| (0..height).map(move |y| (x, y)))
            .filter(move |_| z < depth)
            .map(move |(x, y)| (x, y, self.get(x, y, z)))
    }
}
