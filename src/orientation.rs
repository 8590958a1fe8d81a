//! Compass headings and their rotation rules.

use crate::error::RobotError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The heading of a robot on the grid.
///
/// Exactly four values exist. Anything arriving from outside (a character or a
/// string in the input file) is converted through [`TryFrom<char>`] or
/// [`FromStr`], which reject unknown letters with [`RobotError::InvalidOrientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Rotates 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Rotates 90 degrees counter-clockwise. Inverse of [`turn_right`](Self::turn_right).
    pub fn turn_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Unit displacement of one forward step. North is `+Y`, East is `+X`.
    pub fn step(self) -> IVec2 {
        match self {
            Orientation::North => IVec2::Y,
            Orientation::East => IVec2::X,
            Orientation::South => IVec2::NEG_Y,
            Orientation::West => IVec2::NEG_X,
        }
    }

    /// Single-letter compass code used in input and output lines.
    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = RobotError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Orientation::North),
            'E' => Ok(Orientation::East),
            'S' => Ok(Orientation::South),
            'W' => Ok(Orientation::West),
            other => Err(RobotError::InvalidOrientation(other.to_string())),
        }
    }
}

impl FromStr for Orientation {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Orientation::try_from(c),
            _ => Err(RobotError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_turns_cycle_clockwise() {
        assert_eq!(Orientation::North.turn_right(), Orientation::East);
        assert_eq!(Orientation::East.turn_right(), Orientation::South);
        assert_eq!(Orientation::South.turn_right(), Orientation::West);
        assert_eq!(Orientation::West.turn_right(), Orientation::North);
    }

    #[test]
    fn left_turns_cycle_counter_clockwise() {
        assert_eq!(Orientation::North.turn_left(), Orientation::West);
        assert_eq!(Orientation::West.turn_left(), Orientation::South);
        assert_eq!(Orientation::South.turn_left(), Orientation::East);
        assert_eq!(Orientation::East.turn_left(), Orientation::North);
    }

    #[test]
    fn turns_are_mutual_inverses() {
        for o in Orientation::ALL {
            assert_eq!(o.turn_right().turn_left(), o);
            assert_eq!(o.turn_left().turn_right(), o);
        }
    }

    #[test]
    fn four_turns_return_to_start() {
        for o in Orientation::ALL {
            let right = (0..4).fold(o, |acc, _| acc.turn_right());
            let left = (0..4).fold(o, |acc, _| acc.turn_left());
            assert_eq!(right, o);
            assert_eq!(left, o);
        }
    }

    #[test]
    fn steps_are_unit_vectors() {
        assert_eq!(Orientation::North.step(), IVec2::new(0, 1));
        assert_eq!(Orientation::East.step(), IVec2::new(1, 0));
        assert_eq!(Orientation::South.step(), IVec2::new(0, -1));
        assert_eq!(Orientation::West.step(), IVec2::new(-1, 0));
    }

    #[test]
    fn parses_compass_letters() {
        assert_eq!("N".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!(Orientation::try_from('W'), Ok(Orientation::West));
        assert_eq!(
            "U".parse::<Orientation>(),
            Err(RobotError::InvalidOrientation("U".to_string()))
        );
        assert!(matches!(
            "NE".parse::<Orientation>(),
            Err(RobotError::InvalidOrientation(_))
        ));
        assert!("".parse::<Orientation>().is_err());
        // Lowercase is not accepted.
        assert!(Orientation::try_from('n').is_err());
    }

    #[test]
    fn displays_as_letter() {
        let letters: String = Orientation::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(letters, "NESW");
    }
}
