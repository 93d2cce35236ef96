use serde::{Deserialize, Serialize};

/// Step from a cell to one of its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

const VON_NEUMANN: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

const MOORE: [Direction; 8] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// Row and column offsets of this step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Set of directions an interaction may pick its partner from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Four orthogonal neighbors.
    #[default]
    VonNeumann,
    /// Eight neighbors including diagonals.
    Moore,
}

impl Neighborhood {
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Neighborhood::VonNeumann => &VON_NEUMANN,
            Neighborhood::Moore => &MOORE,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.directions().len()
    }
}

impl std::str::FromStr for Neighborhood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "von_neumann" | "vonneumann" | "4" => Ok(Neighborhood::VonNeumann),
            "moore" | "8" => Ok(Neighborhood::Moore),
            other => Err(format!("unknown neighborhood '{other}'")),
        }
    }
}
