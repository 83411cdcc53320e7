//! Config file loading

use crate::domain::RankingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sections that may wrap the ranking keys inside a shared config file.
const NESTED_SECTIONS: &[&str] = &["snippet-symbols", "ranking"];

pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<RankingConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        return Ok(RankingConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    }
    .and_then(|cfg| {
        cfg.validate()
            .with_context(|| format!("Invalid ranking config: {}", config_file.display()))?;
        Ok(cfg)
    });

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded ranking config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(RankingConfig::default())
        }
    }
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<RankingConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = NESTED_SECTIONS
        .iter()
        .find_map(|section| raw.get(section).cloned())
        .unwrap_or(raw);

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<RankingConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty YAML document means "all defaults".
    if raw.is_null() {
        return Ok(RankingConfig::default());
    }

    let config_val = NESTED_SECTIONS
        .iter()
        .find_map(|section| raw.get(section).cloned())
        .unwrap_or(raw);

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = [
        "snippet-symbols.toml",
        ".snippet-symbols.toml",
        "snippet-symbols.yml",
        "snippet-symbols.yaml",
        ".snippet-symbols.yml",
        ".snippet-symbols.yaml",
    ];

    candidates.iter().map(|candidate| root.join(candidate)).find(|path| path.exists())
}
