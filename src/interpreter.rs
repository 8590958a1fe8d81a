//! Interpreter that drives a [`Robot`] across a [`World`] from an instruction string.
//!
//! The entry point is [`RobotInterpreter`]. Configure it with a [`RobotConfig`],
//! register symbol-to-instruction mappings via [`RobotInterpreter::set_op`] or
//! [`RobotInterpreter::populate_standard_symbols`], then call
//! [`RobotInterpreter::execute`] once per robot, in input order, against the same world.
//!
//! Callers that already hold decoded [`Instruction`]s can use [`run_robot`] directly.

use crate::error::RobotError;
use crate::robot::{Instruction, Robot, RobotReport};
use crate::world::{MoveOutcome, World};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Largest instruction sequence a single robot accepts.
pub const MAX_INSTRUCTIONS: usize = 100;

/// Configuration for robot interpretation.
#[derive(Clone, Debug)]
pub struct RobotConfig {
    /// Maximum number of instructions per robot. Longer sequences are rejected
    /// before any instruction runs.
    pub max_instructions: usize,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            max_instructions: MAX_INSTRUCTIONS,
        }
    }
}

/// Interprets instruction strings for robots sharing one world.
pub struct RobotInterpreter {
    op_map: HashMap<char, Instruction>,
    config: RobotConfig,
}

impl Default for RobotInterpreter {
    /// Default configuration with the standard `L`/`R`/`F` symbols registered.
    fn default() -> Self {
        let mut interpreter = Self::new(RobotConfig::default());
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl RobotInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// Register instructions with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before calling
    /// [`execute`](Self::execute).
    pub fn new(config: RobotConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-instruction map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, Instruction>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns an [`Instruction`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: Instruction) {
        self.op_map.insert(symbol, op);
    }

    /// Registers `L`, `R` and `F`.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('L', Instruction::TurnLeft),
            ('R', Instruction::TurnRight),
            ('F', Instruction::MoveForward),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Runs `symbols` against `robot` and returns its final state.
    ///
    /// The sequence is checked against `max_instructions` before anything runs.
    /// Symbols are then decoded one at a time; once the robot is lost the rest
    /// of the string is ignored, including symbols that would not decode. An
    /// unmapped symbol aborts the run with [`RobotError::UnsupportedInstruction`],
    /// leaving the robot as it was after the previous instruction.
    pub fn execute(
        &self,
        world: &mut World,
        robot: &mut Robot,
        symbols: &str,
    ) -> Result<RobotReport, RobotError> {
        check_length(symbols.chars().count(), self.config.max_instructions)?;

        for (index, symbol) in symbols.chars().enumerate() {
            if robot.is_lost() {
                debug!(remaining = symbols.chars().count() - index, "robot lost, skipping rest");
                break;
            }
            let op = *self
                .op_map
                .get(&symbol)
                .ok_or(RobotError::UnsupportedInstruction { symbol, index })?;
            apply(world, robot, op);
        }

        Ok(robot.report())
    }
}

/// Applies one instruction. A lost robot ignores everything.
pub fn apply(world: &mut World, robot: &mut Robot, instruction: Instruction) -> Option<MoveOutcome> {
    if robot.is_lost() {
        return None;
    }

    trace!(?instruction, position = ?robot.position(), orientation = %robot.orientation(), "apply");
    match instruction {
        Instruction::TurnLeft => {
            robot.turn_left();
            None
        }
        Instruction::TurnRight => {
            robot.turn_right();
            None
        }
        Instruction::MoveForward => {
            let delta = robot.orientation().step();
            Some(world.attempt_move(robot, delta))
        }
    }
}

/// Applies already decoded `instructions` in order, stopping at the first loss.
///
/// Sequences longer than [`MAX_INSTRUCTIONS`] fail with
/// [`RobotError::TooManyInstructions`] and leave the robot untouched.
pub fn run_robot(
    world: &mut World,
    robot: &mut Robot,
    instructions: &[Instruction],
) -> Result<RobotReport, RobotError> {
    check_length(instructions.len(), MAX_INSTRUCTIONS)?;

    for &instruction in instructions {
        if robot.is_lost() {
            break;
        }
        apply(world, robot, instruction);
    }

    Ok(robot.report())
}

fn check_length(count: usize, max: usize) -> Result<(), RobotError> {
    if count > max {
        return Err(RobotError::TooManyInstructions { count, max });
    }
    Ok(())
}
