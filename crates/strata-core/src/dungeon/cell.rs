//! Map cell types and their rendering attributes

use bitflags::bitflags;
use strum::{Display, EnumIter};

/// Cell/terrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum CellType {
    /// Returned for queries outside the grid
    Void = 0,
    #[default]
    Wall = 1,
    Floor = 2,
    Door = 3,
    StairsUp = 4,
    StairsDown = 5,
}

bitflags! {
    /// Static behaviour flags of a cell type
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileFlags: u8 {
        const WALKABLE = 0x01;
        const BLOCKS_LIGHT = 0x02;
    }
}

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
}

/// How a cell type looks and behaves; shared by every cell of that type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAttributes {
    pub glyph: char,
    pub foreground: Rgb,
    pub background: Rgb,
    pub flags: TileFlags,
}

const WALL_BACKGROUND: Rgb = Rgb(0x02, 0x13, 0x1e);

const VOID: TileAttributes = TileAttributes {
    glyph: ' ',
    foreground: Rgb::WHITE,
    background: Rgb::BLACK,
    flags: TileFlags::empty(),
};

const WALL: TileAttributes = TileAttributes {
    glyph: '#',
    foreground: Rgb(0x06, 0x35, 0x54),
    background: WALL_BACKGROUND,
    flags: TileFlags::BLOCKS_LIGHT,
};

const FLOOR: TileAttributes = TileAttributes {
    glyph: '.',
    foreground: Rgb::WHITE,
    background: Rgb::BLACK,
    flags: TileFlags::WALKABLE,
};

const DOOR: TileAttributes = TileAttributes {
    glyph: '=',
    foreground: Rgb(0x0c, 0x99, 0x81),
    background: WALL_BACKGROUND,
    flags: TileFlags::WALKABLE,
};

const STAIRS_UP: TileAttributes = TileAttributes {
    glyph: '<',
    foreground: Rgb::WHITE,
    background: Rgb::BLACK,
    flags: TileFlags::WALKABLE,
};

const STAIRS_DOWN: TileAttributes = TileAttributes {
    glyph: '>',
    foreground: Rgb::WHITE,
    background: Rgb::BLACK,
    flags: TileFlags::WALKABLE,
};

impl CellType {
    /// Rendering attributes for this cell type
    pub const fn attributes(&self) -> &'static TileAttributes {
        match self {
            CellType::Void => &VOID,
            CellType::Wall => &WALL,
            CellType::Floor => &FLOOR,
            CellType::Door => &DOOR,
            CellType::StairsUp => &STAIRS_UP,
            CellType::StairsDown => &STAIRS_DOWN,
        }
    }

    /// Get the display character for this cell type
    pub const fn glyph(&self) -> char {
        self.attributes().glyph
    }

    /// Check if this is passable (can walk through)
    pub const fn is_walkable(&self) -> bool {
        self.attributes().flags.contains(TileFlags::WALKABLE)
    }

    /// Check if this cell type blocks line of sight
    pub const fn blocks_light(&self) -> bool {
        self.attributes().flags.contains(TileFlags::BLOCKS_LIGHT)
    }

    /// Check if this is either end of a stairway
    pub const fn is_stairs(&self) -> bool {
        matches!(self, CellType::StairsUp | CellType::StairsDown)
    }
}
