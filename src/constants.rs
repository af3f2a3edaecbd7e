// src/constants.rs

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_FOLDER_PATH: &str = "./media";
pub const INDEX_FILE: &str = "index.html";

// Environment variables
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
pub const ENV_MEDIA_LOCATOR: &str = "MEDIA_LOCATOR";
pub const ENV_CONFIG_PATH: &str = "SLIDESHOW_CONFIG";

// Supported media extensions (lowercase, without dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "avi", "mov"];

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
