use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{FALLBACK_CONTENT_TYPE, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};

/// Kind of a catalog entry, derived only from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a bare extension (no leading dot, any case).
    /// Returns `None` for anything outside the supported table.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else {
            None
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MIME type for a supported extension; anything else maps to
/// `application/octet-stream`.
pub fn content_type_for(ext: &str) -> &'static str {
    match ext.trim_start_matches('.').to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" => "video/ogg",
        "avi" => "video/avi",
        "mov" => "video/quicktime",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .map(content_type_for)
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Ordering policy applied to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    #[default]
    Alpha,
    Random,
}

impl FromStr for DisplayOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alpha" => Ok(DisplayOrder::Alpha),
            "random" => Ok(DisplayOrder::Random),
            other => Err(format!("unknown display order '{}'", other)),
        }
    }
}

// Accepts any casing; unrecognised values fall back to alphabetical.
impl<'de> Deserialize<'de> for DisplayOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|e| {
            log::warn!("{}, using alpha", e);
            DisplayOrder::Alpha
        }))
    }
}

impl fmt::Display for DisplayOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayOrder::Alpha => f.write_str("alpha"),
            DisplayOrder::Random => f.write_str("random"),
        }
    }
}

/// One discoverable media file, as returned by `/api/files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Base name of the file inside the media folder
    pub name: String,
    /// Filesystem path or `data:` URI, depending on the locator mode
    pub path: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_supported_extensions() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(MediaKind::from_extension(ext), Some(MediaKind::Image));
        }
        for ext in VIDEO_EXTENSIONS {
            assert_eq!(MediaKind::from_extension(ext), Some(MediaKind::Video));
        }
        assert_eq!(MediaKind::from_extension("JPG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension(".Mov"), Some(MediaKind::Video));
    }

    #[test]
    fn test_classify_unsupported_extensions() {
        for ext in ["txt", "", "tiff", "mkv", "jpg.bak", "html"] {
            assert_eq!(MediaKind::from_extension(ext), None, "{ext}");
        }
        assert_eq!(MediaKind::from_path(Path::new("notes")), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("JPEG"), "image/jpeg");
        assert_eq!(content_type_for("mov"), "video/quicktime");
        assert_eq!(content_type_for("svg"), "image/svg+xml");
        assert_eq!(content_type_for("xyz"), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_for_path(Path::new("clip.webm")), "video/webm");
    }

    #[test]
    fn test_display_order_parsing() {
        let alpha: DisplayOrder = serde_json::from_str("\"Alpha\"").unwrap();
        let random: DisplayOrder = serde_json::from_str("\"RANDOM\"").unwrap();
        let unknown: DisplayOrder = serde_json::from_str("\"shuffle\"").unwrap();
        assert_eq!(alpha, DisplayOrder::Alpha);
        assert_eq!(random, DisplayOrder::Random);
        assert_eq!(unknown, DisplayOrder::Alpha);
        assert_eq!(serde_json::to_string(&DisplayOrder::Random).unwrap(), "\"random\"");
    }

    #[test]
    fn test_media_file_wire_format() {
        let file = MediaFile {
            name: "a.mp4".to_string(),
            path: "/srv/media/a.mp4".to_string(),
            kind: MediaKind::Video,
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "a.mp4", "path": "/srv/media/a.mp4", "type": "video" })
        );
    }
}
