use log::{error, info, warn};
use rand::seq::SliceRandom;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::{LocatorMode, SlideshowConfig};
use crate::models::{content_type_for_path, DisplayOrder, MediaFile, MediaKind};
use crate::services::resolver::{confine, Lookup, PathCheck};
use crate::utils::encode_file_to_data_uri;

/// Scan the configured folder (non-recursive) and return one descriptor per
/// supported media file, ordered per `display_order`.
///
/// Never fails: a missing folder or an I/O error is logged and yields an
/// empty catalog.
pub fn list_files(config: &SlideshowConfig, locator: LocatorMode) -> Vec<MediaFile> {
    let folder = &config.folder_path;
    if !folder.is_dir() {
        error!("Configured folder path does not exist: {}", folder.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Error reading media from folder {}: {}", folder.display(), e);
                return Vec::new();
            }
        };
        // Symlinks are not followed, so only real files inside the folder count.
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name: {:?}", entry.file_name());
            continue;
        };
        let Some(kind) = MediaKind::from_path(entry.path()) else {
            continue;
        };
        files.push(MediaFile {
            name: name.to_string(),
            path: locate(entry.path(), content_type_for_path(entry.path()), locator),
            kind,
        });
    }

    apply_order(&mut files, config.display_order);
    info!(
        "Found {} media files in {}, sorted by {}",
        files.len(),
        folder.display(),
        config.display_order
    );
    files
}

/// Describe a single file by name, going through the same traversal guard as
/// the byte resolver. The descriptor keeps the requested name, and its locator
/// points at the guarded file, so nested names and symlinks inside the folder
/// describe exactly what `/media/{name}` would serve.
pub fn describe(config: &SlideshowConfig, name: &str, locator: LocatorMode) -> Lookup<MediaFile> {
    let path = match confine(&config.folder_path, name) {
        PathCheck::Inside(path) if path.is_file() => path,
        PathCheck::Outside => {
            warn!("Access denied - path outside configured folder: {}", name);
            return Lookup::Denied;
        }
        _ => return Lookup::NotFound,
    };
    let requested = Path::new(name);
    let Some(kind) = MediaKind::from_path(requested) else {
        return Lookup::NotFound;
    };
    Lookup::Found(MediaFile {
        name: name.to_string(),
        path: locate(&path, content_type_for_path(requested), locator),
        kind,
    })
}

fn locate(path: &Path, content_type: &str, locator: LocatorMode) -> String {
    match locator {
        LocatorMode::Path => path.to_string_lossy().into_owned(),
        LocatorMode::DataUri => encode_file_to_data_uri(path, content_type).unwrap_or_else(|e| {
            error!("Failed to encode {:?} as data URI: {}", path, e);
            String::new()
        }),
    }
}

fn apply_order(files: &mut [MediaFile], order: DisplayOrder) {
    match order {
        // Byte-wise comparison, independent of locale.
        DisplayOrder::Alpha => files.sort_by(|a, b| a.name.cmp(&b.name)),
        DisplayOrder::Random => files.shuffle(&mut rand::thread_rng()),
    }
}
