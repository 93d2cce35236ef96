//! Cyclic dominance between breeds.
//!
//! Breeds sit on a cycle of length `num_breeds`. Breed `a` dominates breed `b`
//! when `(a - b) mod num_breeds` lies in `[1, radius]`, so every breed beats the
//! breeds just below it and loses to the ones just above it. The default radius
//! is half the cycle, which makes the relation a tournament: for even breed
//! counts the pair sitting exactly opposite each other is settled in favor of
//! the lower index.

use rochambeau_data::{Breed, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominanceRule {
    num_breeds: u8,
    radius: u8,
}

impl DominanceRule {
    /// Full-band rule: every distinct pair has exactly one winner.
    #[must_use]
    pub fn new(num_breeds: u8) -> Self {
        Self {
            num_breeds,
            radius: Self::max_radius(num_breeds),
        }
    }

    /// Narrower band. Pairs further apart than `radius` never interact.
    /// `radius` is clamped to `[1, num_breeds / 2]`.
    #[must_use]
    pub fn with_radius(num_breeds: u8, radius: u8) -> Self {
        Self {
            num_breeds,
            radius: radius.clamp(1, Self::max_radius(num_breeds).max(1)),
        }
    }

    #[must_use]
    pub const fn max_radius(num_breeds: u8) -> u8 {
        num_breeds / 2
    }

    #[must_use]
    pub fn num_breeds(&self) -> u8 {
        self.num_breeds
    }

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Whether the rule has a winner for every distinct pair.
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.radius == Self::max_radius(self.num_breeds)
    }

    #[must_use]
    pub fn dominates(&self, a: Breed, b: Breed) -> bool {
        if a == b {
            return false;
        }
        let n = u16::from(self.num_breeds);
        let distance = (u16::from(a) + n - u16::from(b)) % n;
        if distance > u16::from(self.radius) {
            return false;
        }
        if distance * 2 == n {
            return a < b;
        }
        true
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self, a: Breed, b: Breed) -> Outcome {
        debug_assert!(a < self.num_breeds && b < self.num_breeds);
        if self.dominates(a, b) {
            Outcome::SecondConverts
        } else if self.dominates(b, a) {
            Outcome::FirstConverts
        } else {
            Outcome::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_paper_scissors_cycle() {
        let rule = DominanceRule::new(3);
        assert!(rule.dominates(1, 0));
        assert!(rule.dominates(2, 1));
        assert!(rule.dominates(0, 2));
        assert!(!rule.dominates(0, 1));
        assert_eq!(rule.outcome(0, 1), Outcome::FirstConverts);
        assert_eq!(rule.outcome(1, 0), Outcome::SecondConverts);
    }

    #[test]
    fn test_two_breeds_lower_index_wins() {
        let rule = DominanceRule::new(2);
        assert!(rule.dominates(0, 1));
        assert!(!rule.dominates(1, 0));
        assert_eq!(rule.outcome(0, 1), Outcome::SecondConverts);
    }

    #[test]
    fn test_even_midpoint_tie_break() {
        let rule = DominanceRule::new(4);
        assert!(rule.dominates(0, 2));
        assert!(!rule.dominates(2, 0));
        assert!(rule.dominates(1, 3));
        assert!(rule.dominates(1, 0));
        assert!(rule.dominates(0, 3));
    }

    #[test]
    fn test_same_breed_never_changes() {
        let rule = DominanceRule::new(5);
        for b in 0..5 {
            assert_eq!(rule.outcome(b, b), Outcome::NoChange);
        }
    }

    #[test]
    fn test_narrow_radius_leaves_distant_pairs_alone() {
        let rule = DominanceRule::with_radius(5, 1);
        assert!(!rule.is_total());
        assert!(rule.dominates(1, 0));
        assert_eq!(rule.outcome(0, 2), Outcome::NoChange);
        assert_eq!(rule.outcome(2, 0), Outcome::NoChange);
    }

    #[test]
    fn test_radius_is_clamped() {
        assert_eq!(DominanceRule::with_radius(5, 9).radius(), 2);
        assert_eq!(DominanceRule::with_radius(5, 0).radius(), 1);
        assert!(DominanceRule::with_radius(5, 9).is_total());
    }
}
