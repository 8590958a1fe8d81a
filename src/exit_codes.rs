//! Stable exit codes for the CLI.

/// Every robot in the mission ran and its report was written.
pub const OK: i32 = 0;
/// The mission, config, or an output file could not be read, parsed, or written,
/// or a robot record was rejected. Nothing after the failing record ran.
pub const INVALID: i32 = 1;
