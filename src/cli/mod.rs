//! Command-line interface for mvcheck.
//!
//! Provides commands for checking document sets, listing the available
//! checks, and inspecting the guideline table and configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::checks::{registry, run_checks, select, CheckMetadata, Report};
use crate::config::{self, ResolvedConfig};
use crate::domain::{DocumentSet, Level, Setting, Tier};

/// mvcheck - Cross-difficulty consistency checks for beatmap sets
#[derive(Parser, Debug)]
#[command(name = "mvcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check document sets and print a JSON report for each
    Check {
        /// Document set files or glob patterns (YAML or JSON)
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Run only these checks (repeatable)
        #[arg(long = "only", value_name = "CHECK_ID")]
        only: Vec<String>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with an error when any finding is at or above this level
        #[arg(long, value_name = "LEVEL")]
        fail_on: Option<Level>,
    },

    /// List available checks
    Checks,

    /// Show the effective guideline table
    Guidelines,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?;

        match self.command {
            Commands::Check {
                patterns,
                only,
                pretty,
                fail_on,
            } => check_documents(config, &patterns, &only, pretty, fail_on).await,
            Commands::Checks => {
                list_checks(config);
                Ok(())
            }
            Commands::Guidelines => {
                show_guidelines(config);
                Ok(())
            }
            Commands::Config => {
                show_config(config);
                Ok(())
            }
        }
    }
}

/// Expand patterns into document paths, in the order given
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let matches = glob::glob(pattern).with_context(|| format!("Invalid pattern: {}", pattern))?;

        let before = paths.len();
        for entry in matches {
            let path = entry.with_context(|| format!("Failed to read match for {}", pattern))?;
            if path.is_file() {
                paths.push(path);
            }
        }

        if paths.len() == before {
            anyhow::bail!("No document sets match: {}", pattern);
        }
    }

    Ok(paths)
}

async fn check_documents(
    config: &ResolvedConfig,
    patterns: &[String],
    only: &[String],
    pretty: bool,
    fail_on: Option<Level>,
) -> Result<()> {
    let checks = select(config, only)?;
    let paths = expand_patterns(patterns)?;

    let mut failing = 0;
    for path in &paths {
        let set = DocumentSet::from_file(path).await?;
        let report = run_checks(&set, &checks)
            .with_context(|| format!("Check failed for {}", path.display()))?;

        println!("{}", to_json(&report, pretty)?);

        if breaches(&report, fail_on) {
            failing += 1;
        }
    }

    if let Some(level) = fail_on {
        if failing > 0 {
            anyhow::bail!(
                "{} of {} document set(s) have findings at or above {}",
                failing,
                paths.len(),
                level
            );
        }
    }

    Ok(())
}

fn to_json(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("Failed to serialize report")
}

/// True when the report has a finding at or above `fail_on`
fn breaches(report: &Report, fail_on: Option<Level>) -> bool {
    match (fail_on, report.highest_level()) {
        (Some(threshold), Some(highest)) => highest >= threshold,
        _ => false,
    }
}

fn list_checks(config: &ResolvedConfig) {
    println!("Available checks:");
    println!();

    for check in registry(config) {
        let meta = check.metadata();
        println!("{}", describe_check(&meta, config.is_enabled(meta.id)));
    }
}

/// One entry of the `checks` listing
fn describe_check(meta: &CheckMetadata, enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };

    let mut out = format!("  {} ({})\n", meta.id, state);
    out.push_str(&format!("    Category: {}\n", meta.category));
    out.push_str(&format!("    Level:    {}\n", meta.level));
    out.push_str(&format!("    {}\n", meta.message));

    if let Some(doc) = meta.documentation {
        out.push('\n');
        for line in doc.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }
    out
}

fn show_guidelines(config: &ResolvedConfig) {
    println!(
        "{:<8} {:<14} {:<14} {:<14} {:<14}",
        "Tier", "Circle Size", "Approach Rate", "Overall Diff", "HP Drain"
    );

    for tier in Tier::ALL {
        let cells: Vec<String> = Setting::ALL
            .iter()
            .map(|setting| config.guidelines.range(tier, *setting).to_string())
            .collect();

        println!(
            "{:<8} {:<14} {:<14} {:<14} {:<14}",
            tier.as_str(),
            cells[0],
            cells[1],
            cells[2],
            cells[3]
        );
    }
}

fn show_config(config: &ResolvedConfig) {
    println!("mvcheck Configuration");
    println!("=====================");
    println!();

    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!();

    println!("Blank sample size: {} bytes", config.blank_sample_bytes);

    if config.disabled_checks.is_empty() {
        println!("Disabled checks:   (none)");
    } else {
        println!("Disabled checks:   {}", config.disabled_checks.join(", "));
    }
}
