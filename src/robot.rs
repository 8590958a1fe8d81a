//! Robot state and the instructions that drive it.

use crate::error::RobotError;
use crate::orientation::Orientation;
use crate::world::World;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a robot is still on the grid.
///
/// The transition is one-way: a lost robot never becomes active again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotStatus {
    #[default]
    Active,
    Lost,
}

/// A single robot, mutated in place by its instruction sequence.
///
/// Robots never share state with each other. The only thing one run leaves
/// behind for the next is the scent stored in the [`World`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Robot {
    /// Current cell. While lost, the last cell the robot stood on.
    pub(crate) position: IVec2,

    pub(crate) orientation: Orientation,

    pub(crate) status: RobotStatus,
}

impl Robot {
    /// Places an active robot at `(x, y)` inside `world`.
    ///
    /// Fails with [`RobotError::InvalidPosition`] if the cell is off the grid.
    pub fn new(world: &World, x: i32, y: i32, orientation: Orientation) -> Result<Self, RobotError> {
        let position = IVec2::new(x, y);
        if !world.contains(position) {
            return Err(RobotError::InvalidPosition {
                x,
                y,
                x_limit: world.x_limit(),
                y_limit: world.y_limit(),
            });
        }
        Ok(Self {
            position,
            orientation,
            status: RobotStatus::Active,
        })
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn status(&self) -> RobotStatus {
        self.status
    }

    pub fn is_lost(&self) -> bool {
        self.status == RobotStatus::Lost
    }

    /// Rotates the robot 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.turn_left();
    }

    /// Rotates the robot 90 degrees clockwise.
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.turn_right();
    }

    /// Snapshot of the robot's final state for reporting.
    pub fn report(&self) -> RobotReport {
        RobotReport {
            x: self.position.x,
            y: self.position.y,
            orientation: self.orientation,
            lost: self.is_lost(),
        }
    }
}

/// Operations a robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
    /// Step one cell along the current heading (`F`).
    MoveForward,
}

impl TryFrom<char> for Instruction {
    type Error = RobotError;

    /// Decodes a standard symbol. A lone symbol is reported at index 0.
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            'F' => Ok(Instruction::MoveForward),
            _ => Err(RobotError::UnsupportedInstruction { symbol, index: 0 }),
        }
    }
}

impl Instruction {
    /// Decodes a whole instruction string using the standard symbols.
    ///
    /// The first unknown symbol fails with [`RobotError::UnsupportedInstruction`].
    pub fn parse_all(symbols: &str) -> Result<Vec<Self>, RobotError> {
        symbols
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Self::try_from(symbol)
                    .map_err(|_| RobotError::UnsupportedInstruction { symbol, index })
            })
            .collect()
    }
}

/// Final state of one robot run.
///
/// Displays as `X Y O`, with a ` LOST` suffix for lost robots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub lost: bool,
}

impl fmt::Display for RobotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}
