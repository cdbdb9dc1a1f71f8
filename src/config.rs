//! Configuration for mvcheck.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MVCHECK_DISABLED_CHECKS, MVCHECK_BLANK_SAMPLE_BYTES)
//! 2. Config file (.mvcheck/config.yaml, then ~/.mvcheck/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .mvcheck/config.yaml
//! - Falls back to the user's home directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::guidelines::{GuidelineOverrides, GuidelineTable};
use crate::samples::BLANK_SAMPLE_BYTES;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DISABLED_CHECKS_VAR: &str = "MVCHECK_DISABLED_CHECKS";
const BLANK_SAMPLE_BYTES_VAR: &str = "MVCHECK_BLANK_SAMPLE_BYTES";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub samples: Option<SamplesConfig>,
    /// Per-tier, per-setting range overrides
    #[serde(default)]
    pub guidelines: GuidelineOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChecksConfig {
    /// Check ids to skip
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplesConfig {
    pub blank_size_bytes: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Check ids that won't run
    pub disabled_checks: Vec<String>,
    /// Expected size of a silent sample
    pub blank_sample_bytes: u64,
    /// Guideline table with overrides applied
    pub guidelines: GuidelineTable,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            disabled_checks: Vec::new(),
            blank_sample_bytes: BLANK_SAMPLE_BYTES,
            guidelines: GuidelineTable::default(),
        }
    }
}

impl ResolvedConfig {
    pub fn is_enabled(&self, check_id: &str) -> bool {
        !self.disabled_checks.iter().any(|id| id == check_id)
    }
}

/// Environment overrides, captured once so resolution stays pure
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    disabled_checks: Option<String>,
    blank_sample_bytes: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            disabled_checks: std::env::var(DISABLED_CHECKS_VAR).ok(),
            blank_sample_bytes: std::env::var(BLANK_SAMPLE_BYTES_VAR).ok(),
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".mvcheck").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".mvcheck").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Combine file settings, environment overrides and defaults
fn resolve(
    config_file: Option<PathBuf>,
    file: Option<ConfigFile>,
    env: EnvOverrides,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig {
        config_file,
        ..Default::default()
    };

    if let Some(file) = file {
        resolved.disabled_checks = file.checks.disabled;
        if let Some(bytes) = file.samples.and_then(|s| s.blank_size_bytes) {
            resolved.blank_sample_bytes = bytes;
        }
        resolved.guidelines = GuidelineTable::with_overrides(&file.guidelines);
    }

    if let Some(list) = env.disabled_checks {
        resolved.disabled_checks = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect();
    }

    if let Some(bytes) = env.blank_sample_bytes {
        resolved.blank_sample_bytes = bytes
            .trim()
            .parse()
            .with_context(|| format!("{} is not a byte count: {}", BLANK_SAMPLE_BYTES_VAR, bytes))?;
    }

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = config_file.as_deref().map(load_config_file).transpose()?;

    resolve(config_file, file, EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
