use log::{debug, error, warn};
use std::fs::File;
use std::path::{Component, Path, PathBuf};

use crate::config::SlideshowConfig;
use crate::models::{content_type_for_path, MediaKind};

/// Result of confining a requested name to a root directory.
#[derive(Debug, PartialEq, Eq)]
pub enum PathCheck {
    /// Canonical path of an existing entry under the root
    Inside(PathBuf),
    /// The name escapes the root, lexically or through symlinks
    Outside,
    /// The name stays inside the root but nothing exists there
    Missing,
}

/// Resolve `requested` against `root` and make sure the result stays inside
/// it. Both a lexical check (so non-existent escapes are still denied) and a
/// canonical check (so symlinks cannot leave the root) must pass.
pub fn confine(root: &Path, requested: &str) -> PathCheck {
    let root = match root.canonicalize() {
        Ok(root) => root,
        Err(e) => {
            warn!("Root directory {:?} is not accessible: {}", root, e);
            return PathCheck::Missing;
        }
    };

    let joined = root.join(requested);
    if !normalize(&joined).starts_with(&root) {
        return PathCheck::Outside;
    }

    match joined.canonicalize() {
        Ok(resolved) if resolved.starts_with(&root) => PathCheck::Inside(resolved),
        Ok(_) => PathCheck::Outside,
        Err(_) => PathCheck::Missing,
    }
}

// Purely lexical: drops `.` and applies `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// An opened media file ready to be streamed.
#[derive(Debug)]
pub struct MediaStream {
    pub file: File,
    pub path: PathBuf,
    pub kind: MediaKind,
    pub content_type: &'static str,
    pub len: u64,
}

/// Terminal outcome of a name lookup inside the media folder.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    Denied,
    NotFound,
}

pub type Resolution = Lookup<MediaStream>;

/// Map a requested file name to an open stream inside the configured folder.
/// Unsupported extensions are reported as `NotFound`, same as missing files.
pub fn resolve(config: &SlideshowConfig, requested: &str) -> Resolution {
    let path = match confine(&config.folder_path, requested) {
        PathCheck::Inside(path) => path,
        PathCheck::Outside => {
            warn!("Access denied - path outside configured folder: {}", requested);
            return Resolution::Denied;
        }
        PathCheck::Missing => {
            warn!("File not found: {}", requested);
            return Resolution::NotFound;
        }
    };

    if !path.is_file() {
        warn!("File not found: {:?}", path);
        return Resolution::NotFound;
    }

    let requested_path = Path::new(requested);
    let Some(kind) = MediaKind::from_path(requested_path) else {
        warn!("File type not supported: {}", requested);
        return Resolution::NotFound;
    };
    let content_type = content_type_for_path(requested_path);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            error!("Error opening media file {:?}: {}", path, e);
            return Resolution::NotFound;
        }
    };
    let len = file.metadata().map(|m| m.len()).unwrap_or(0);
    debug!("Serving media file: {}, Size: {} bytes", requested, len);

    Resolution::Found(MediaStream {
        file,
        path,
        kind,
        content_type,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, SlideshowConfig) {
        let tmp = tempdir().unwrap();
        let media = tmp.path().join("media");
        fs::create_dir(&media).unwrap();
        fs::write(media.join("b.png"), b"png-bytes").unwrap();
        fs::write(media.join("a.mp4"), b"mp4").unwrap();
        fs::write(media.join("c.txt"), b"text").unwrap();
        fs::create_dir(media.join("nested.png")).unwrap();
        fs::write(tmp.path().join("secret.png"), b"secret").unwrap();
        let config = SlideshowConfig {
            folder_path: media,
            ..Default::default()
        };
        (tmp, config)
    }

    #[test]
    fn test_resolve_existing_image() {
        let (_tmp, config) = setup();
        match resolve(&config, "b.png") {
            Resolution::Found(stream) => {
                assert_eq!(stream.content_type, "image/png");
                assert_eq!(stream.kind, MediaKind::Image);
                assert_eq!(stream.len, 9);
            }
            other => panic!("expected stream, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_video_content_type() {
        let (_tmp, config) = setup();
        assert!(matches!(
            resolve(&config, "a.mp4"),
            Resolution::Found(MediaStream { content_type: "video/mp4", .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let (_tmp, config) = setup();
        assert!(matches!(resolve(&config, "nonexistent.png"), Resolution::NotFound));
    }

    #[test]
    fn test_unsupported_extension_is_not_found() {
        let (_tmp, config) = setup();
        assert!(matches!(resolve(&config, "c.txt"), Resolution::NotFound));
    }

    #[test]
    fn test_directory_is_not_found() {
        let (_tmp, config) = setup();
        assert!(matches!(resolve(&config, "nested.png"), Resolution::NotFound));
        assert!(matches!(resolve(&config, ""), Resolution::NotFound));
    }

    #[test]
    fn test_traversal_is_denied() {
        let (_tmp, config) = setup();
        for name in [
            "../secret.png",
            "../../etc/passwd",
            "./../secret.png",
            "sub/../../secret.png",
            "../../../../../../nope.png",
        ] {
            assert!(matches!(resolve(&config, name), Resolution::Denied), "{name}");
        }
    }

    #[test]
    fn test_absolute_path_is_denied() {
        let (tmp, config) = setup();
        let outside = tmp.path().join("secret.png");
        assert!(matches!(
            resolve(&config, &outside.to_string_lossy()),
            Resolution::Denied
        ));
    }

    #[test]
    fn test_sibling_with_common_prefix_is_denied() {
        let (tmp, config) = setup();
        let sibling = tmp.path().join("media2");
        fs::create_dir(&sibling).unwrap();
        fs::write(sibling.join("x.png"), b"x").unwrap();
        assert!(matches!(resolve(&config, "../media2/x.png"), Resolution::Denied));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_is_denied() {
        let (tmp, config) = setup();
        std::os::unix::fs::symlink(
            tmp.path().join("secret.png"),
            config.folder_path.join("link.png"),
        )
        .unwrap();
        assert!(matches!(resolve(&config, "link.png"), Resolution::Denied));
    }

    #[test]
    fn test_inner_parent_segments_stay_inside() {
        let (_tmp, config) = setup();
        assert!(matches!(
            resolve(&config, "nested.png/../b.png"),
            Resolution::Found(_)
        ));
    }

    #[test]
    fn test_missing_folder_is_not_found() {
        let tmp = tempdir().unwrap();
        let config = SlideshowConfig {
            folder_path: tmp.path().join("gone"),
            ..Default::default()
        };
        assert!(matches!(resolve(&config, "a.png"), Resolution::NotFound));
    }

    #[test]
    fn test_normalize_is_lexical() {
        assert_eq!(
            normalize(Path::new("/srv/media/./a/../b.png")),
            PathBuf::from("/srv/media/b.png")
        );
        assert_eq!(normalize(Path::new("/srv/../../x")), PathBuf::from("/x"));
    }
}
