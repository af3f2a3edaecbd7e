use log::{debug, error, warn};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::INDEX_FILE;
use crate::services::resolver::{confine, Lookup, PathCheck};

// Default browser client, compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("index.html", include_str!("../../wwwroot/index.html")),
    ("script.js", include_str!("../../wwwroot/script.js")),
    ("style.css", include_str!("../../wwwroot/style.css")),
];

#[derive(Debug)]
pub struct Asset {
    pub content: Cow<'static, [u8]>,
    pub content_type: String,
}

/// Static files for the fallback route: either an on-disk directory or the
/// embedded client.
#[derive(Clone, Default)]
pub struct AssetService {
    root: Option<PathBuf>,
}

impl AssetService {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Lookup<Asset> {
        let path = path.trim_start_matches('/');
        let path = if path.is_empty() { INDEX_FILE } else { path };

        match &self.root {
            Some(root) => Self::from_dir(root, path),
            None => Self::from_embedded(path),
        }
    }

    fn from_dir(root: &Path, path: &str) -> Lookup<Asset> {
        let file = match confine(root, path) {
            PathCheck::Inside(file) if file.is_file() => file,
            PathCheck::Outside => {
                warn!("Access denied - static path outside {:?}: {}", root, path);
                return Lookup::Denied;
            }
            _ => return Lookup::NotFound,
        };
        match fs::read(&file) {
            Ok(data) => {
                debug!("Serving static file {:?}", file);
                Lookup::Found(Asset {
                    content: Cow::Owned(data),
                    content_type: content_type(path),
                })
            }
            Err(e) => {
                error!("Failed to read static file {:?}: {}", file, e);
                Lookup::NotFound
            }
        }
    }

    fn from_embedded(path: &str) -> Lookup<Asset> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, body)| {
                Lookup::Found(Asset {
                    content: Cow::Borrowed(body.as_bytes()),
                    content_type: content_type(path),
                })
            })
            .unwrap_or(Lookup::NotFound)
    }
}

fn content_type(path: &str) -> String {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    actix_files::file_extension_to_mime(ext).to_string()
}
