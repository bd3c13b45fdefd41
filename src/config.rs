use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::addon::manifest::DEFAULT_ADDON_NAME;

pub const DEFAULT_PORT: u16 = 7000;
pub const DEFAULT_ROOT: &str = "/home/Library/Movies And Series";

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub port: Option<u16>,
    pub name: Option<String>,
    pub localhost: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub port: u16,
    pub name: String,
    pub localhost: bool,
}

impl Config {
    /// Merge CLI (or environment) values over the config file over defaults.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            root: args
                .root
                .clone()
                .or(file.root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            name: args
                .name
                .clone()
                .or(file.name)
                .unwrap_or_else(|| DEFAULT_ADDON_NAME.to_string()),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("localfiles.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("localfiles").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
