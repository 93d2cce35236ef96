use crate::Breed;
use serde::{Deserialize, Serialize};

/// Number of cells held by each breed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    counts: Vec<u64>,
}

impl Census {
    /// Empty census for `num_breeds` breeds.
    #[must_use]
    pub fn new(num_breeds: usize) -> Self {
        Self {
            counts: vec![0; num_breeds],
        }
    }

    /// Tallies `cells`. Values outside `[0, num_breeds)` are ignored.
    #[must_use]
    pub fn from_cells(num_breeds: usize, cells: &[Breed]) -> Self {
        let mut census = Self::new(num_breeds);
        for &breed in cells {
            if let Some(count) = census.counts.get_mut(breed as usize) {
                *count += 1;
            }
        }
        census
    }

    /// Moves one cell from `from` to `to`.
    pub fn transfer(&mut self, from: Breed, to: Breed) {
        self.counts[from as usize] -= 1;
        self.counts[to as usize] += 1;
    }

    #[must_use]
    pub fn count(&self, breed: Breed) -> u64 {
        self.counts.get(breed as usize).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn num_breeds(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Breeds still holding at least one cell.
    #[must_use]
    pub fn survivors(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Breed holding the most cells; ties go to the lower index.
    #[must_use]
    pub fn leader(&self) -> Option<(Breed, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .fold(None, |best: Option<(Breed, u64)>, (i, &c)| match best {
                Some((_, top)) if top >= c => best,
                _ => Some((i as Breed, c)),
            })
    }

    /// The single breed holding every counted cell, if there is one.
    #[must_use]
    pub fn sole_survivor(&self) -> Option<Breed> {
        if self.survivors() == 1 {
            self.leader().map(|(breed, _)| breed)
        } else {
            None
        }
    }

    /// Fraction of counted cells held by `breed`.
    #[must_use]
    pub fn share(&self, breed: Breed) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(breed) as f64 / total as f64
        }
    }
}
