//! Square toroidal grid of breeds.

use crate::error::{ArenaError, Result};
use rochambeau_data::{Breed, Census, Direction};

/// `size × size` row-major grid; neighbors wrap around the edges.
///
/// Doubles as the snapshot buffer handed out to consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    cells: Vec<Breed>,
    size: usize,
}

impl TerrainGrid {
    /// Grid filled with breed 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    /// Builds a grid from row-major `cells`; `None` unless `cells` is square.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Breed>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { cells, size })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Panics if the cell lies outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Breed {
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<Breed> {
        if self.contains(row, col) {
            Ok(self.get(row, col))
        } else {
            Err(ArenaError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, breed: Breed) {
        let idx = self.index(row, col);
        self.cells[idx] = breed;
    }

    /// Neighbor of `(row, col)` one step in `direction`, wrapping at the edges.
    #[inline]
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        let (dr, dc) = direction.offset();
        let size = self.size as isize;
        (
            (row as isize + dr).rem_euclid(size) as usize,
            (col as isize + dc).rem_euclid(size) as usize,
        )
    }

    #[must_use]
    pub fn cells(&self) -> &[Breed] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Breed]> {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Overwrites every cell with values drawn from `next`, row by row.
    pub fn fill_with(&mut self, mut next: impl FnMut() -> Breed) {
        self.cells.iter_mut().for_each(|cell| *cell = next());
    }

    /// Copies this grid into `buffer`, which must have the same dimensions.
    pub fn snapshot_into(&self, buffer: &mut TerrainGrid) -> Result<()> {
        if buffer.size != self.size || buffer.cells.len() != self.cells.len() {
            return Err(ArenaError::BufferMismatch {
                expected: self.cells.len(),
                actual: buffer.cells.len(),
            });
        }
        buffer.cells.copy_from_slice(&self.cells);
        Ok(())
    }

    /// The breed occupying every cell, if the grid is uniform.
    #[must_use]
    pub fn uniform_breed(&self) -> Option<Breed> {
        let (&first, rest) = self.cells.split_first()?;
        rest.iter().all(|&b| b == first).then_some(first)
    }

    #[must_use]
    pub fn census(&self, num_breeds: usize) -> Census {
        Census::from_cells(num_breeds, &self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_wraps_at_edges() {
        let grid = TerrainGrid::new(4);
        assert_eq!(grid.neighbor(0, 0, Direction::Up), (3, 0));
        assert_eq!(grid.neighbor(0, 0, Direction::Left), (0, 3));
        assert_eq!(grid.neighbor(3, 3, Direction::Down), (0, 3));
        assert_eq!(grid.neighbor(3, 3, Direction::Right), (3, 0));
        assert_eq!(grid.neighbor(0, 3, Direction::UpRight), (3, 0));
        assert_eq!(grid.neighbor(1, 1, Direction::DownLeft), (2, 0));
    }

    #[test]
    fn test_single_cell_is_its_own_neighbor() {
        let grid = TerrainGrid::new(1);
        assert_eq!(grid.neighbor(0, 0, Direction::Down), (0, 0));
        assert_eq!(grid.neighbor(0, 0, Direction::UpLeft), (0, 0));
    }

    #[test]
    fn test_get_set_row_major() {
        let mut grid = TerrainGrid::new(3);
        grid.set(1, 2, 2);
        assert_eq!(grid.get(1, 2), 2);
        assert_eq!(grid.cells()[5], 2);
        assert_eq!(grid.rows().nth(1), Some(&[0, 0, 2][..]));
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid = TerrainGrid::new(2);
        assert_eq!(
            grid.try_get(2, 0),
            Err(ArenaError::OutOfBounds {
                row: 2,
                col: 0,
                size: 2
            })
        );
    }

    #[test]
    fn test_snapshot_into_rejects_mismatched_buffer() {
        let grid = TerrainGrid::new(3);
        let mut buffer = TerrainGrid::new(2);
        assert_eq!(
            grid.snapshot_into(&mut buffer),
            Err(ArenaError::BufferMismatch {
                expected: 9,
                actual: 4
            })
        );
    }

    #[test]
    fn test_snapshot_into_rejects_short_buffer() {
        let grid = TerrainGrid::new(2);
        let mut buffer = TerrainGrid {
            cells: vec![0; 3],
            size: 2,
        };
        assert_eq!(
            grid.snapshot_into(&mut buffer),
            Err(ArenaError::BufferMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(buffer.cells, vec![0; 3]);
    }

    #[test]
    fn test_uniform_breed() {
        let mut grid = TerrainGrid::from_cells(2, vec![1, 1, 1, 1]).unwrap();
        assert_eq!(grid.uniform_breed(), Some(1));
        grid.set(0, 0, 0);
        assert_eq!(grid.uniform_breed(), None);
        assert!(TerrainGrid::from_cells(2, vec![1, 1, 1]).is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const ALL: [Direction; 8] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ];

        fn opposite(direction: Direction) -> Direction {
            let (dr, dc) = direction.offset();
            ALL.into_iter()
                .find(|d| d.offset() == (-dr, -dc))
                .unwrap()
        }

        proptest! {
            #[test]
            fn neighbor_stays_in_bounds_and_steps_back(
                size in 1usize..64,
                row_seed in any::<usize>(),
                col_seed in any::<usize>(),
                direction in proptest::sample::select(ALL.to_vec())
            ) {
                let grid = TerrainGrid::new(size);
                let (row, col) = (row_seed % size, col_seed % size);
                let (n_row, n_col) = grid.neighbor(row, col, direction);
                prop_assert!(grid.contains(n_row, n_col));
                prop_assert_eq!(grid.neighbor(n_row, n_col, opposite(direction)), (row, col));
            }
        }
    }
}
