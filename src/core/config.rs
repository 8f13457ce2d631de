use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::paths;

/// Root configuration structure for folio.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default = "default_projects_dir")]
    pub projects_dir: String,

    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_media")]
    pub media: MediaConfig,

    #[serde(default = "default_icons")]
    pub icons: IconConfig,

    #[serde(default = "default_sidecar_names")]
    pub sidecar_names: Vec<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            icons_dir: default_icons_dir(),
            output: default_output(),
            database: default_database(),
            media: default_media(),
            icons: default_icons(),
            sidecar_names: default_sidecar_names(),
        }
    }
}

/// Asset classification and public path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_media_prefix")]
    pub prefix: String,

    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,

    /// Lookup order for `<video>-thumb.<ext>` siblings
    #[serde(default = "default_thumbnail_extensions")]
    pub thumbnail_extensions: Vec<String>,
}

/// Technology icon lookup settings (filesystem pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_icon_prefix")]
    pub prefix: String,

    /// Lookup order for `<name>.<ext>` in the icons directory
    #[serde(default = "default_icon_extensions")]
    pub extensions: Vec<String>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_projects_dir() -> String {
    "public/projects".to_string()
}

fn default_icons_dir() -> String {
    "public/icons".to_string()
}

fn default_output() -> String {
    "src/data/projects.json".to_string()
}

fn default_database() -> String {
    "data/portfolio.db".to_string()
}

fn default_media() -> MediaConfig {
    MediaConfig {
        prefix: default_media_prefix(),
        image_extensions: default_image_extensions(),
        video_extensions: default_video_extensions(),
        thumbnail_extensions: default_thumbnail_extensions(),
    }
}

fn default_media_prefix() -> String {
    "/projects".to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_image_extensions() -> Vec<String> {
    strings(&["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"])
}

fn default_video_extensions() -> Vec<String> {
    strings(&["mp4", "webm", "mov", "m4v", "ogg"])
}

fn default_thumbnail_extensions() -> Vec<String> {
    strings(&["jpg", "jpeg", "png", "webp", "gif"])
}

fn default_icons() -> IconConfig {
    IconConfig {
        prefix: default_icon_prefix(),
        extensions: default_icon_extensions(),
    }
}

fn default_icon_prefix() -> String {
    "/icons".to_string()
}

fn default_icon_extensions() -> Vec<String> {
    strings(&["svg", "png"])
}

fn default_sidecar_names() -> Vec<String> {
    strings(&["info.md", "project.yaml", "project.yml"])
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load folio.json from the base directory.
/// If the file is missing or invalid, silently returns built-in defaults.
pub fn load_config(base_dir: &Path) -> FolioConfig {
    load_config_from_file(base_dir).unwrap_or_default()
}

/// Attempt to load config from folio.json.
pub fn load_config_from_file(base_dir: &Path) -> crate::Result<FolioConfig> {
    let path = paths::config_file(base_dir);

    if !path.exists() {
        return Err(crate::Error::internal_io(
            "folio.json not found",
            Some(format!("read {}", path.display())),
        ));
    }

    let content = crate::io::read_file(&path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("parse folio.json".to_string()))
    })
}

/// Check if folio.json exists in the base directory
pub fn config_exists(base_dir: &Path) -> bool {
    paths::config_file(base_dir).exists()
}
