use crate::targets;
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserConfig {
    pub targets: Vec<String>,
    pub scan_root: String, // e.g., "app"
    pub page_file: String, // e.g., "page.tsx"
    pub skip_dirs: Vec<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            targets: targets::default_targets(),
            scan_root: "app".to_string(),
            page_file: "page.tsx".to_string(),
            skip_dirs: vec![
                "node_modules".to_string(),
                ".next".to_string(),
                ".git".to_string(),
            ],
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    // Allow tests to override with LINEFIX_CONFIG_DIR
    if let Some(dir) = std::env::var_os("LINEFIX_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let pd = ProjectDirs::from("", "", "linefix").context("unable to determine config dir")?;
    Ok(pd.config_dir().to_path_buf())
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_or_default() -> Result<UserConfig> {
    let path = config_path()?;
    if path.exists() {
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: UserConfig =
            serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    } else {
        Ok(UserConfig::default())
    }
}

pub fn save(cfg: &UserConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let pretty = serde_json::to_string_pretty(cfg)?;
    crate::fsio::write_atomic(&path, pretty.as_bytes())
}

impl UserConfig {
    /// Value of `key`, list entries one per line.
    pub fn get(&self, key: &str) -> Result<String> {
        Ok(match key {
            "targets" => self.targets.join("\n"),
            "scan_root" => self.scan_root.clone(),
            "page_file" => self.page_file.clone(),
            "skip_dirs" => self.skip_dirs.join("\n"),
            _ => bail!("Unknown key: {key}"),
        })
    }

    /// Sets `key`; list keys take comma-separated values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "targets" => self.targets = split_list(value),
            "scan_root" => self.scan_root = value.to_string(),
            "page_file" => self.page_file = value.to_string(),
            "skip_dirs" => self.skip_dirs = split_list(value),
            _ => bail!("Unknown key: {key}"),
        }
        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
