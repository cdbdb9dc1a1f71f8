//! Document sets and loading them from disk.
//!
//! A document set is written in YAML or JSON (picked by file extension,
//! YAML otherwise). Sample sizes that are not given inline are read from
//! files next to the document.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::event::InputError;
use super::variant::Variant;

/// All variants of one song, plus its hit-sound samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSet {
    /// Display title
    #[serde(default)]
    pub title: String,

    /// Variants in declaration order
    pub variants: Vec<Variant>,

    /// Hit-sound samples used by the set
    #[serde(default)]
    pub samples: Vec<SampleInfo>,

    /// Directory the set was loaded from (sample files are resolved against it)
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

/// A hit-sound sample with its precomputed inspection data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInfo {
    /// File name relative to the set directory
    pub name: String,

    /// File size; read from disk by the loader when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,

    /// Peak frames (one vector of channel peaks per frame)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peaks: Option<Vec<Vec<f32>>>,
}

impl DocumentSet {
    /// Create a set from variants alone
    pub fn new(title: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            title: title.into(),
            variants,
            samples: Vec::new(),
            source_dir: None,
        }
    }

    /// Parse a set from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let set: Self = serde_yaml::from_str(content).context("Failed to parse document set YAML")?;
        set.validate()?;
        Ok(set)
    }

    /// Parse a set from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(content).context("Failed to parse document set JSON")?;
        set.validate()?;
        Ok(set)
    }

    /// Load a set from a file and fill in sample sizes from disk
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read document set: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let mut set = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
        .with_context(|| format!("Invalid document set: {}", path.display()))?;

        if set.title.is_empty() {
            set.title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        set.source_dir = path.parent().map(Path::to_path_buf);
        set.resolve_sample_sizes().await;

        Ok(set)
    }

    /// Check the structural rules the checks rely on
    pub fn validate(&self) -> Result<(), InputError> {
        if self.variants.is_empty() {
            return Err(InputError::NoVariants);
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if variant.name.is_empty() {
                return Err(InputError::UnnamedVariant);
            }
            if !seen.insert(variant.name.as_str()) {
                return Err(InputError::DuplicateVariant {
                    name: variant.name.clone(),
                });
            }
            // Equal offsets are fine; a later point may not come earlier
            if variant
                .timing_points
                .windows(2)
                .any(|pair| pair[1].position < pair[0].position)
            {
                return Err(InputError::UnorderedTimingPoints {
                    variant: variant.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Fill missing sample sizes from files next to the document.
    ///
    /// Samples whose file can't be read keep `size_bytes: None` and are
    /// reported as unreadable by the sample check.
    async fn resolve_sample_sizes(&mut self) {
        let Some(dir) = self.source_dir.clone() else {
            return;
        };

        for sample in self.samples.iter_mut().filter(|s| s.size_bytes.is_none()) {
            let path = dir.join(&sample.name);
            match tokio::fs::metadata(&path).await {
                Ok(meta) => sample.size_bytes = Some(meta.len()),
                Err(e) => tracing::warn!(sample = %sample.name, "Failed to stat sample file: {}", e),
            }
        }
    }
}
