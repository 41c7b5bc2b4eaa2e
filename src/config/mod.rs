//! Optional user configuration for the `marks` CLI.
//!
//! Configuration lives in a markdown file with YAML frontmatter at
//! `~/.config/marks/config.md`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputMode;

/// Environment variable overriding the configured output format
pub const FORMAT_ENV: &str = "MARKS_FORMAT";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report rendering settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report format: text or json (default: text)
    #[serde(default)]
    pub format: OutputMode,
    /// Color the verdict when writing to a terminal (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputMode::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        match global_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Pick the output mode: CLI flag, then `MARKS_FORMAT`, then the config file.
    pub fn resolve_mode(&self, flag: Option<OutputMode>) -> Result<OutputMode> {
        if let Some(mode) = flag {
            return Ok(mode);
        }

        let from_env = std::env::var(FORMAT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<OutputMode>())
            .transpose()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid {} value", FORMAT_ENV))?;

        Ok(from_env.unwrap_or(self.output.format))
    }
}

/// Returns the path to the user config file at ~/.config/marks/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/marks/config.md"))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
///
/// Both delimiters must sit on a line of their own, so `---` inside a YAML
/// value or comment does not end the frontmatter.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let frontmatter = rest[..offset].to_string();
            let body = rest[offset + line.len()..].trim_start();
            return (Some(frontmatter), body);
        }
        offset += line.len();
    }

    (None, content)
}
