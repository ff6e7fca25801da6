//! Site configuration
//!
//! Every knob the controller reads lives here. All fields carry defaults so an empty
//! (or absent) config file yields the stock behavior.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the navigation progress indicator is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressFormula {
    /// `(ordinal + 1) / distinct sections among controls`
    #[default]
    DistinctSections,
    /// `(control index + 1) / (control count / 2)`, matching pages that duplicate every
    /// control for desktop and mobile menus.
    LegacyHalfControls,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Breadcrumb labels keyed by section id
    pub section_labels: BTreeMap<String, String>,
    /// Queries shorter than this (in characters) hide the result surface
    pub min_query_len: usize,
    /// Characters kept before the first match in a search excerpt
    pub excerpt_before: usize,
    /// Characters kept after the start of the first match in a search excerpt
    pub excerpt_after: usize,
    /// Viewport widths strictly above this close the mobile overlay
    pub overlay_breakpoint: u32,
    /// Delay before a copy button reverts from "Copied!" to "Copy"
    pub copy_revert_ms: u64,
    /// Delay before an animated progress fill returns to its authored width
    pub fill_restore_ms: u64,
    pub progress_formula: ProgressFormula,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            section_labels: default_section_labels(),
            min_query_len: 3,
            excerpt_before: 50,
            excerpt_after: 100,
            overlay_breakpoint: 768,
            copy_revert_ms: 2000,
            fill_restore_ms: 500,
            progress_formula: ProgressFormula::default(),
        }
    }
}

/// Labels shipped with the documentation theme
pub fn default_section_labels() -> BTreeMap<String, String> {
    [
        ("overview", "Overview"),
        ("fundamentals", "OpenShift Fundamentals"),
        ("development", "Development Environment"),
        ("ollama", "Ollama Setup"),
        ("webui", "Web Interface"),
        ("lifecycle", "Container Lifecycle"),
        ("gpu", "GPU Management"),
        ("networking", "Networking"),
        ("storage", "Storage"),
        ("security", "Security"),
        ("monitoring", "Monitoring"),
        ("cicd", "CI/CD Pipeline"),
        ("troubleshooting", "Troubleshooting"),
    ]
    .into_iter()
    .map(|(id, label)| (id.to_string(), label.to_string()))
    .collect()
}

impl SiteConfig {
    /// Parse a TOML document. Labels given in the document are merged over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(content)?;

        let mut labels = default_section_labels();
        labels.append(&mut config.section_labels);
        config.section_labels = labels;

        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Display label for a section, falling back to the raw id
    pub fn label_for<'a>(&'a self, section_id: &'a str) -> &'a str {
        self.section_labels
            .get(section_id)
            .map(String::as_str)
            .unwrap_or(section_id)
    }
}
