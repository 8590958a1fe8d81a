//! Command-line front end: reads a mission file, runs its robots in order,
//! and writes one report line per robot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use martian_robots::config::{Config, load_config};
use martian_robots::{Mission, exit_codes, format_reports, logging};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "martian-robots",
    version,
    about = "Run grid robots from a mission file and report where they end up"
)]
struct Cli {
    /// Mission file: world limits, then position/instruction line pairs.
    input: PathBuf,

    /// Write reports here instead of stdout. The file is replaced.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (instruction limit, symbols, log filter).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print scented cells to stderr after the run.
    #[arg(long)]
    show_scent: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    logging::init(&cfg.log_filter);

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let mission =
        Mission::parse(&input).with_context(|| format!("parse {}", cli.input.display()))?;
    let outcome = mission
        .run(&cfg.interpreter())
        .with_context(|| format!("run {}", cli.input.display()))?;

    let rendered = format_reports(&outcome.reports);
    match &cli.output {
        Some(path) => write_reports(path, &rendered)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("write reports to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }

    if cli.show_scent {
        for cell in outcome.world.scented_cells() {
            eprintln!("scent {} {}", cell.x, cell.y);
        }
    }

    info!(robots = outcome.reports.len(), "mission complete");
    Ok(())
}

fn write_reports(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "reports written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_only() {
        let cli = Cli::parse_from(["martian-robots", "mission.txt"]);
        assert_eq!(cli.input, PathBuf::from("mission.txt"));
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.show_scent);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "martian-robots",
            "mission.txt",
            "-o",
            "out.txt",
            "--config",
            "robots.toml",
            "--show-scent",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("robots.toml")));
        assert!(cli.show_scent);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["martian-robots"]).is_err());
    }
}
