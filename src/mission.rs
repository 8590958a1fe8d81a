//! Mission files: the world line, robot records, and the report lines they produce.
//!
//! A mission looks like
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//!
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```
//!
//! The first non-blank line holds the world's upper-right corner. Every robot
//! then takes two lines: its start position and heading, then its instruction
//! string, which may be empty. Blank lines between records are ignored.

use crate::error::MissionError;
use crate::interpreter::RobotInterpreter;
use crate::orientation::Orientation;
use crate::robot::{Robot, RobotReport};
use crate::world::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One robot record from a mission file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotRecord {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub instructions: String,

    /// 1-based line of the position line, for error reporting.
    pub line: usize,

    /// 1-based line of the instruction string.
    pub instructions_line: usize,
}

/// A parsed mission: world limits plus robots in file order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// 1-based line holding the world limits.
    pub world_line: usize,
    pub x_limit: i32,
    pub y_limit: i32,
    pub robots: Vec<RobotRecord>,
}

/// Result of running a mission: one report per robot plus the world it left behind.
#[derive(Clone, Debug)]
pub struct MissionOutcome {
    pub reports: Vec<RobotReport>,
    pub world: World,
}

impl Mission {
    /// Parses mission text.
    ///
    /// Only the shape of each line is checked here. Range checks (world limits,
    /// start cells, instruction symbols) happen in [`run`](Self::run).
    pub fn parse(input: &str) -> Result<Self, MissionError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()));

        let (world_line, world_text) = lines
            .find(|(_, text)| !text.is_empty())
            .ok_or(MissionError::MissingWorldLine)?;
        let (x_limit, y_limit) = parse_world_line(world_text).ok_or_else(|| {
            MissionError::MalformedWorldLine {
                line: world_line,
                content: world_text.to_string(),
            }
        })?;

        let mut robots = Vec::new();
        while let Some((line, text)) = lines.find(|(_, text)| !text.is_empty()) {
            let (x, y, heading) =
                parse_robot_line(text).ok_or_else(|| MissionError::MalformedRobotLine {
                    line,
                    content: text.to_string(),
                })?;
            let orientation = heading
                .parse::<Orientation>()
                .map_err(MissionError::at(line))?;
            // The line after a position is always its instructions, even when empty.
            let (instructions_line, instructions) = lines
                .next()
                .ok_or(MissionError::MissingInstructions { line })?;
            robots.push(RobotRecord {
                x,
                y,
                orientation,
                instructions: instructions.to_string(),
                line,
                instructions_line,
            });
        }

        debug!(x_limit, y_limit, robots = robots.len(), "parsed mission");
        Ok(Self {
            world_line,
            x_limit,
            y_limit,
            robots,
        })
    }

    /// Runs every robot in file order against one shared world.
    ///
    /// Processing halts at the first record that fails; nothing after it runs.
    pub fn run(&self, interpreter: &RobotInterpreter) -> Result<MissionOutcome, MissionError> {
        let mut world =
            World::new(self.x_limit, self.y_limit).map_err(MissionError::at(self.world_line))?;
        let mut reports = Vec::with_capacity(self.robots.len());

        for record in &self.robots {
            let mut robot = Robot::new(&world, record.x, record.y, record.orientation)
                .map_err(MissionError::at(record.line))?;
            let report = interpreter
                .execute(&mut world, &mut robot, &record.instructions)
                .map_err(MissionError::at(record.instructions_line))?;
            info!(line = record.line, result = %report, "robot finished");
            reports.push(report);
        }

        Ok(MissionOutcome { reports, world })
    }
}

/// Joins reports one per line, without a trailing newline.
pub fn format_reports(reports: &[RobotReport]) -> String {
    reports
        .iter()
        .map(RobotReport::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_world_line(text: &str) -> Option<(i32, i32)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [x, y] => Some((x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

fn parse_robot_line(text: &str) -> Option<(i32, i32, &str)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [x, y, heading] => Some((x.parse().ok()?, y.parse().ok()?, *heading)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RobotError;

    const SAMPLE: &str = "5 3\n1 1 E\nRFRFRFRF\n\n3 2 N\nFRRFLLFFRRFLL\n\n0 3 W\nLLFFFLFLFL";

    #[test]
    fn parses_sample() {
        let mission = Mission::parse(SAMPLE).unwrap();
        assert_eq!((mission.x_limit, mission.y_limit), (5, 3));
        assert_eq!(mission.robots.len(), 3);
        assert_eq!(mission.robots[1].line, 5);
        assert_eq!(mission.robots[1].instructions_line, 6);
        assert_eq!(mission.robots[1].orientation, Orientation::North);
        assert_eq!(mission.robots[2].instructions, "LLFFFLFLFL");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mission = Mission::parse("  2 4 \n1 2 E \n F \n").unwrap();
        assert_eq!((mission.x_limit, mission.y_limit), (2, 4));
        assert_eq!(mission.robots[0].instructions, "F");
    }

    #[test]
    fn empty_instruction_line_belongs_to_its_robot() {
        let mission = Mission::parse("5 3\n1 1 E\n\n\n3 2 N\nF").unwrap();
        assert_eq!(mission.robots.len(), 2);
        assert_eq!(mission.robots[0].instructions, "");
        assert_eq!(mission.robots[0].instructions_line, 3);
        assert_eq!(mission.robots[1].line, 5);

        let outcome = mission.run(&RobotInterpreter::default()).unwrap();
        // (3, 3) is still on a 5x3 grid, so a single step north is safe.
        assert_eq!(format_reports(&outcome.reports), "1 1 E\n3 3 N");
    }

    #[test]
    fn world_only_mission_has_no_robots() {
        let mission = Mission::parse("5 3\n").unwrap();
        assert!(mission.robots.is_empty());
        let outcome = mission.run(&RobotInterpreter::default()).unwrap();
        assert_eq!(format_reports(&outcome.reports), "");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(Mission::parse("\n \n"), Err(MissionError::MissingWorldLine));
        assert!(matches!(
            Mission::parse("5"),
            Err(MissionError::MalformedWorldLine { line: 1, .. })
        ));
        assert!(matches!(
            Mission::parse("5 x"),
            Err(MissionError::MalformedWorldLine { line: 1, .. })
        ));
        assert_eq!(
            Mission::parse("5 3\n1 1 U\nF"),
            Err(MissionError::Robot {
                line: 2,
                source: RobotError::InvalidOrientation("U".to_string())
            })
        );
        assert!(matches!(
            Mission::parse("5 3\n1 1\nF"),
            Err(MissionError::MalformedRobotLine { line: 2, .. })
        ));
        assert_eq!(
            Mission::parse("5 3\n1 1 E\nF\n\n2 2 N"),
            Err(MissionError::MissingInstructions { line: 5 })
        );
    }

    #[test]
    fn run_reports_sample_output() {
        let mission = Mission::parse(SAMPLE).unwrap();
        let outcome = mission.run(&RobotInterpreter::default()).unwrap();
        assert_eq!(
            format_reports(&outcome.reports),
            "1 1 E\n3 3 N LOST\n2 3 S"
        );
    }

    #[test]
    fn run_halts_on_first_bad_record() {
        let mission = Mission::parse("5 3\n1 1 E\nFX\n\n0 0 N\nF").unwrap();
        let err = mission.run(&RobotInterpreter::default()).unwrap_err();
        assert_eq!(
            err,
            MissionError::Robot {
                line: 3,
                source: RobotError::UnsupportedInstruction {
                    symbol: 'X',
                    index: 1
                }
            }
        );
    }

    #[test]
    fn run_rejects_oversized_world_and_start() {
        let err = Mission::parse("51 3").unwrap().run(&RobotInterpreter::default());
        assert!(matches!(
            err,
            Err(MissionError::Robot {
                line: 1,
                source: RobotError::InvalidDimensions { .. }
            })
        ));

        let err = Mission::parse("5 3\n6 1 E\nF")
            .unwrap()
            .run(&RobotInterpreter::default());
        assert!(matches!(
            err,
            Err(MissionError::Robot {
                line: 2,
                source: RobotError::InvalidPosition { .. }
            })
        ));
    }
}
