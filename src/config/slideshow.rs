use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_FOLDER_PATH};
use crate::error::{AppError, AppResult};
use crate::models::DisplayOrder;

/// Slideshow settings read from `config.json`. Loaded once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideshowConfig {
    /// Seconds each image stays on screen
    pub image_duration: u32,
    pub folder_path: PathBuf,
    /// Cross-fade length in seconds
    pub fade_transition_duration: u32,
    pub auto_start: bool,
    pub zoom_on_image: bool,
    pub display_order: DisplayOrder,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            image_duration: 5,
            folder_path: PathBuf::from(DEFAULT_FOLDER_PATH),
            fade_transition_duration: 1,
            auto_start: true,
            zoom_on_image: true,
            display_order: DisplayOrder::Alpha,
        }
    }
}

impl SlideshowConfig {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Try each candidate in order and return the first file that exists and
    /// parses. The chosen config must then pass [`validate`](Self::validate).
    ///
    /// # Errors
    /// [`AppError::Config`] when no candidate yields a config, or when the
    /// selected one is invalid.
    pub fn load(candidates: &[PathBuf]) -> AppResult<Self> {
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            let data = match fs::read_to_string(path) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Failed to read config {:?}: {}", path, e);
                    continue;
                }
            };
            match Self::from_json(&data) {
                Ok(config) => {
                    info!("Configuration loaded from: {:?}", path);
                    info!("Configuration contents: {:?}", config);
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => warn!("Failed to parse config {:?}: {}", path, e),
            }
        }

        let tried = candidates
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ");
        Err(AppError::Config(format!(
            "no usable {} found, looked in: {}",
            CONFIG_FILE_NAME, tried
        )))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.image_duration < 1 {
            return Err(AppError::Config(
                "imageDuration must be at least 1 second".to_string(),
            ));
        }
        if !self.folder_path.is_dir() {
            return Err(AppError::Config(format!(
                "configured folder path does not exist: {}",
                self.folder_path.display()
            )));
        }
        Ok(())
    }
}

/// Candidate locations for `config.json`. An explicit path replaces the
/// search; otherwise the executable's directory, the working directory and
/// its parent are tried in that order.
pub fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_FILE_NAME));
        candidates.push(cwd.join("..").join(CONFIG_FILE_NAME));
    }
    candidates.dedup();
    candidates
}
