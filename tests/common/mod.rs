#![allow(dead_code)]

pub mod macros;

use rochambeau_lib::engine::{Arena, ArenaBuilder, Breed, Direction, Neighborhood, RandomSource};

/// Random source replaying fixed choices. Each list is cycled.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    breeds: Vec<Breed>,
    cells: Vec<(usize, usize)>,
    directions: Vec<Direction>,
    breed_cursor: usize,
    cell_cursor: usize,
    direction_cursor: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            breeds: vec![0],
            cells: vec![(0, 0)],
            directions: vec![Direction::Right],
            breed_cursor: 0,
            cell_cursor: 0,
            direction_cursor: 0,
        }
    }

    /// Row-major initial terrain.
    pub fn with_breeds(mut self, breeds: &[Breed]) -> Self {
        self.breeds = breeds.to_vec();
        self
    }

    pub fn with_cells(mut self, cells: &[(usize, usize)]) -> Self {
        self.cells = cells.to_vec();
        self
    }

    pub fn with_directions(mut self, directions: &[Direction]) -> Self {
        self.directions = directions.to_vec();
        self
    }
}

fn cycle<T: Copy>(items: &[T], cursor: &mut usize) -> T {
    let item = items[*cursor % items.len()];
    *cursor += 1;
    item
}

impl RandomSource for ScriptedSource {
    fn next_cell(&mut self, _arena_size: usize) -> (usize, usize) {
        cycle(&self.cells, &mut self.cell_cursor)
    }

    fn next_direction(&mut self, _neighborhood: Neighborhood) -> Direction {
        cycle(&self.directions, &mut self.direction_cursor)
    }

    fn next_breed(&mut self, _num_breeds: u8) -> Breed {
        cycle(&self.breeds, &mut self.breed_cursor)
    }
}

/// Initialized arena on a seeded ChaCha generator.
pub fn seeded_arena(num_breeds: usize, arena_size: usize, seed: u64) -> Arena {
    let mut arena = ArenaBuilder::new()
        .num_breeds(num_breeds)
        .arena_size(arena_size)
        .seed(seed)
        .build()
        .expect("Failed to build arena");
    arena.init();
    arena
}

/// Initialized arena replaying `source`.
pub fn scripted_arena(
    num_breeds: usize,
    arena_size: usize,
    source: ScriptedSource,
) -> Arena<ScriptedSource> {
    let mut arena = ArenaBuilder::new()
        .num_breeds(num_breeds)
        .arena_size(arena_size)
        .build_with(source)
        .expect("Failed to build arena");
    arena.init();
    arena
}
