//! The bounded grid robots move on, and the scent marks left by lost robots.

use crate::error::RobotError;
use crate::robot::{Robot, RobotStatus};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Largest allowed value for either world limit.
pub const MAX_COORDINATE: i32 = 50;

/// A rectangular grid spanning `(0, 0)..=(x_limit, y_limit)`.
///
/// The world is created once per session and shared by every robot run in it.
/// Its scent set only ever grows: a cell is added the first time a robot is lost
/// departing from it and is never removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct World {
    x_limit: i32,
    y_limit: i32,

    /// Cells from which a robot has already been lost. Kept sparse: most
    /// worlds only ever collect a handful of marks along their edges.
    scent: HashSet<IVec2>,
}

/// What happened when a robot tried to step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The target cell was on the grid and the robot now stands on it.
    Moved,
    /// The step would leave the grid but the departure cell is scented, so it was ignored.
    Protected,
    /// The step would leave the grid. The robot is now lost and its cell is scented.
    Lost,
}

impl World {
    /// Creates a world whose upper-right corner is `(x_limit, y_limit)`.
    ///
    /// Fails with [`RobotError::InvalidDimensions`] if either limit is negative
    /// or above [`MAX_COORDINATE`].
    pub fn new(x_limit: i32, y_limit: i32) -> Result<Self, RobotError> {
        let valid = |limit: i32| (0..=MAX_COORDINATE).contains(&limit);
        if !valid(x_limit) || !valid(y_limit) {
            return Err(RobotError::InvalidDimensions {
                x_limit,
                y_limit,
                max: MAX_COORDINATE,
            });
        }
        Ok(Self {
            x_limit,
            y_limit,
            scent: HashSet::new(),
        })
    }

    pub fn x_limit(&self) -> i32 {
        self.x_limit
    }

    pub fn y_limit(&self) -> i32 {
        self.y_limit
    }

    /// True if `cell` lies on the grid (limits inclusive).
    pub fn contains(&self, cell: IVec2) -> bool {
        (0..=self.x_limit).contains(&cell.x) && (0..=self.y_limit).contains(&cell.y)
    }

    pub fn is_scented(&self, cell: IVec2) -> bool {
        self.scent.contains(&cell)
    }

    /// Adds `cell` to the scent set. Marking an already scented cell is a no-op.
    pub fn mark_scented(&mut self, cell: IVec2) {
        self.scent.insert(cell);
    }

    /// Scented cells ordered by `(x, y)`.
    pub fn scented_cells(&self) -> Vec<IVec2> {
        let mut cells: Vec<IVec2> = self.scent.iter().copied().collect();
        cells.sort_by_key(|c| (c.x, c.y));
        cells
    }

    /// Moves `robot` by `delta` if the target stays on the grid.
    ///
    /// Leaving the grid is decided by the robot's current cell alone: if that
    /// cell is scented the step is dropped and the robot stays active, otherwise
    /// the cell is scented and the robot is marked lost in place. Direction of
    /// travel plays no part.
    pub fn attempt_move(&mut self, robot: &mut Robot, delta: IVec2) -> MoveOutcome {
        let target = robot.position + delta;
        if self.contains(target) {
            robot.position = target;
            return MoveOutcome::Moved;
        }

        let departure = robot.position;
        if self.is_scented(departure) {
            debug!(x = departure.x, y = departure.y, "scent blocks move off grid");
            return MoveOutcome::Protected;
        }

        self.mark_scented(departure);
        robot.status = RobotStatus::Lost;
        debug!(x = departure.x, y = departure.y, "robot lost, cell scented");
        MoveOutcome::Lost
    }
}
