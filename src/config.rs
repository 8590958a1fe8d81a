//! CLI configuration loaded from a TOML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::interpreter::{MAX_INSTRUCTIONS, RobotConfig, RobotInterpreter};
use crate::robot::Instruction;

/// Simulator configuration (TOML).
///
/// Every field is optional. Missing fields take the standard values, so an
/// empty file behaves exactly like running without `--config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Per-robot instruction limit. May tighten, never exceed, the protocol limit of 100.
    pub max_instructions: usize,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub symbols: SymbolConfig,
}

/// Characters that encode each instruction in mission files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SymbolConfig {
    pub left: char,
    pub right: char,
    pub forward: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            left: 'L',
            right: 'R',
            forward: 'F',
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_instructions: MAX_INSTRUCTIONS,
            log_filter: "warn".to_string(),
            symbols: SymbolConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_instructions == 0 || self.max_instructions > MAX_INSTRUCTIONS {
            return Err(anyhow!(
                "max_instructions must be within 1..={MAX_INSTRUCTIONS}, got {}",
                self.max_instructions
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must not be empty"));
        }
        let SymbolConfig {
            left,
            right,
            forward,
        } = self.symbols;
        if left == right || left == forward || right == forward {
            return Err(anyhow!(
                "symbols must be distinct, got left={left:?} right={right:?} forward={forward:?}"
            ));
        }
        if [left, right, forward].iter().any(|c| c.is_whitespace()) {
            return Err(anyhow!("symbols must not be whitespace"));
        }
        Ok(())
    }

    /// Builds an interpreter using this configuration's limit and symbols.
    pub fn interpreter(&self) -> RobotInterpreter {
        let map = HashMap::from([
            (self.symbols.left, Instruction::TurnLeft),
            (self.symbols.right, Instruction::TurnRight),
            (self.symbols.forward, Instruction::MoveForward),
        ]);
        RobotInterpreter::new(RobotConfig {
            max_instructions: self.max_instructions,
        })
        .with_map(map)
    }
}

/// Load config from a TOML file.
///
/// The file must exist; callers without a config path use `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
