//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use strata_core::dungeon::{Carving, Room, RoomCarver};
use strata_core::{BuildConfig, CarveParams, DungeonRng, SizeRange};

/// One hand-written level: rooms in discovery order plus extra open cells
#[derive(Debug, Clone, Default)]
pub struct ScriptedLevel {
    pub rooms: Vec<Room>,
    pub open: Vec<(usize, usize)>,
}

impl ScriptedLevel {
    pub fn rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            open: Vec::new(),
        }
    }

    pub fn with_open(mut self, cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.open.extend(cells);
        self
    }
}

/// Carver that replays a fixed list of levels, then solid rock
#[derive(Debug, Default)]
pub struct ScriptedCarver {
    levels: VecDeque<ScriptedLevel>,
}

impl ScriptedCarver {
    pub fn new(levels: impl IntoIterator<Item = ScriptedLevel>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }
}

impl RoomCarver for ScriptedCarver {
    fn carve(
        &mut self,
        width: usize,
        height: usize,
        _params: &CarveParams,
        _rng: &mut DungeonRng,
    ) -> Carving {
        let mut carving = Carving::solid(width, height);
        if let Some(level) = self.levels.pop_front() {
            for room in level.rooms {
                carving.push_room(room);
            }
            for (x, y) in level.open {
                carving.dig(x, y);
            }
        }
        carving
    }
}

/// Config that accepts maps as small as 3x3
pub fn small_config(width: usize, height: usize, depth: usize) -> BuildConfig {
    BuildConfig::new(width, height, depth)
        .with_seed(1)
        .with_carve(CarveParams {
            room_width: SizeRange::new(1, 1),
            room_height: SizeRange::new(1, 1),
            ..CarveParams::default()
        })
}
