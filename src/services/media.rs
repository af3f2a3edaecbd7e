use std::sync::Arc;

use crate::config::{LocatorMode, SlideshowConfig};
use crate::models::MediaFile;
use crate::services::catalog;
use crate::services::resolver::{self, Lookup, Resolution};

/// Shared handle over the immutable slideshow config. Cheap to clone; every
/// operation reads the filesystem fresh.
#[derive(Clone)]
pub struct MediaService {
    config: Arc<SlideshowConfig>,
    locator: LocatorMode,
}

impl MediaService {
    pub fn new(config: SlideshowConfig, locator: LocatorMode) -> Self {
        Self {
            config: Arc::new(config),
            locator,
        }
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn locator(&self) -> LocatorMode {
        self.locator
    }

    pub fn list_files(&self) -> Vec<MediaFile> {
        catalog::list_files(&self.config, self.locator)
    }

    pub fn describe(&self, name: &str) -> Lookup<MediaFile> {
        catalog::describe(&self.config, name, self.locator)
    }

    pub fn resolve(&self, name: &str) -> Resolution {
        resolver::resolve(&self.config, name)
    }
}
