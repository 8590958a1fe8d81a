//! # martian-robots
//!
//! Simulates robots crossing a bounded rectangular grid under turn-left,
//! turn-right and move-forward instructions.
//!
//! A robot that steps off the grid is lost, and the cell it left from is
//! marked with a *scent*. Later robots in the same [`World`] that try to leave
//! from a scented cell have that step ignored instead of being lost. Robots
//! therefore run strictly one after another, in input order, against a single
//! shared world.
//!
//! ```
//! use martian_robots::{Orientation, Robot, RobotInterpreter, World};
//!
//! let mut world = World::new(5, 3)?;
//! let interpreter = RobotInterpreter::default();
//!
//! let mut robot = Robot::new(&world, 3, 2, Orientation::North)?;
//! let report = interpreter.execute(&mut world, &mut robot, "FRRFLLFFRRFLL")?;
//! assert_eq!(report.to_string(), "3 3 N LOST");
//! # Ok::<(), martian_robots::RobotError>(())
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod interpreter;
pub mod logging;
pub mod mission;
pub mod orientation;
pub mod robot;
pub mod world;

pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use orientation::*;
pub use robot::*;
pub use world::*;
