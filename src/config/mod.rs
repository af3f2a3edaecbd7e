use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_CONFIG_PATH, ENV_HOST, ENV_MEDIA_LOCATOR, ENV_PORT,
    ENV_STATIC_DIR,
};

mod slideshow;
pub use slideshow::*;

/// How catalog entries point at their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocatorMode {
    /// Filesystem path; the client fetches bytes from `/media/{name}`
    #[default]
    Path,
    /// Inline `data:` URI, for sandboxed clients that cannot reach `/media`
    DataUri,
}

impl FromStr for LocatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "path" => Ok(LocatorMode::Path),
            "data-uri" | "datauri" | "embed" => Ok(LocatorMode::DataUri),
            other => Err(format!("unknown media locator '{}'", other)),
        }
    }
}

/// Process-level settings for the HTTP server. Read from the environment,
/// CLI flags override individual fields.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the client from this directory instead of the embedded copy
    pub static_dir: Option<PathBuf>,
    pub locator: LocatorMode,
    /// Explicit slideshow config file; disables the candidate search
    pub config_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let host = std::env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port: u16 = std::env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let locator = std::env::var(ENV_MEDIA_LOCATOR)
            .ok()
            .and_then(|v| match v.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log::warn!("{}, using path locators", e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            host,
            port,
            static_dir: std::env::var(ENV_STATIC_DIR).ok().map(PathBuf::from),
            locator,
            config_path: std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_candidates(&self) -> Vec<PathBuf> {
        candidate_paths(self.config_path.as_deref())
    }
}
