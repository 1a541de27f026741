use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{RoiConfig, CONFIG_FILE_NAME};
use super::validation::validate_config;
use crate::errors::RoiError;

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config and reject it if validation finds problems.
pub fn parse_and_validate_config(contents: &str) -> Result<RoiConfig, String> {
    let config = toml::from_str::<RoiConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    let problems = validate_config(&config);
    if problems.is_empty() {
        Ok(config)
    } else {
        Err(problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "))
    }
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> RoiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiConfig::default()
        })
}

pub fn load_config() -> RoiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, failures are errors.
pub fn load_config_file(path: &Path) -> Result<RoiConfig, RoiError> {
    let contents = read_config_file(path).map_err(|e| RoiError::io(path, e))?;
    parse_and_validate_config(&contents).map_err(|message| RoiError::parse(path, message))
}
