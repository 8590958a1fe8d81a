//! Error types for the robot core and the mission file layer.

use thiserror::Error;

/// Errors raised at the boundary of the robot core.
///
/// None of these occur with well-formed input. When a run aborts with one of
/// them, the robot keeps the state it had after the last applied instruction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("invalid world dimensions {x_limit}x{y_limit}: each limit must be within 0..={max}")]
    InvalidDimensions { x_limit: i32, y_limit: i32, max: i32 },

    #[error("invalid robot position ({x}, {y}): must be within (0, 0)..=({x_limit}, {y_limit})")]
    InvalidPosition {
        x: i32,
        y: i32,
        x_limit: i32,
        y_limit: i32,
    },

    #[error("invalid orientation '{0}': expected one of N, E, S, W")]
    InvalidOrientation(String),

    #[error("unsupported instruction '{symbol}' at index {index}")]
    UnsupportedInstruction { symbol: char, index: usize },

    #[error("too many instructions: {count} exceeds the limit of {max}")]
    TooManyInstructions { count: usize, max: usize },
}

/// Errors raised while reading or running a mission file.
///
/// Line numbers are 1-based and refer to the input text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MissionError {
    #[error("missing world dimensions line")]
    MissingWorldLine,

    #[error("line {line}: expected \"<x> <y>\" world limits, got {content:?}")]
    MalformedWorldLine { line: usize, content: String },

    #[error("line {line}: expected \"<x> <y> <N|E|S|W>\" robot position, got {content:?}")]
    MalformedRobotLine { line: usize, content: String },

    #[error("line {line}: robot position has no instruction line")]
    MissingInstructions { line: usize },

    #[error("line {line}")]
    Robot {
        line: usize,
        #[source]
        source: RobotError,
    },
}

impl MissionError {
    pub(crate) fn at(line: usize) -> impl FnOnce(RobotError) -> Self {
        move |source| Self::Robot { line, source }
    }
}
