//! Manifest record shapes.
//!
//! The filesystem and database pipelines emit different JSON contracts
//! (`images`/`videos` vs a single `image`, `iconType` only from the
//! database). They are kept as two types instead of one merged shape.

use serde::Serialize;

/// Technology entry resolved from the icons directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechEntry {
    pub name: String,
    pub icon: Option<String>,
}

/// Technology entry resolved from the `technologies` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbTechEntry {
    pub name: String,
    pub icon: Option<String>,
    #[serde(rename = "iconType")]
    pub icon_type: Option<String>,
}

/// Image or video file exposed to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaAsset {
    pub path: String,
    pub thumbnail: Option<String>,
}

/// Project assembled from a sidecar file and its directory.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    /// Omitted from the JSON when the sidecar has no title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub tech: Vec<TechEntry>,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
    pub image_layout: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Project assembled from a `projects` row.
#[derive(Debug, Clone, Serialize)]
pub struct DbProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub tech: Vec<DbTechEntry>,
    pub start_date: String,
    pub end_date: String,
}

/// Accessors shared by both record shapes.
pub trait Identified {
    fn id(&self) -> u32;
    fn end_date(&self) -> &str;
}

impl Identified for ProjectRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn end_date(&self) -> &str {
        &self.end_date
    }
}

impl Identified for DbProjectRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn end_date(&self) -> &str {
        &self.end_date
    }
}

pub const DEFAULT_IMAGE_LAYOUT: &str = "grid";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_tech_entry_uses_icon_type_key() {
        let entry = DbTechEntry {
            name: "Rust".to_string(),
            icon: None,
            icon_type: None,
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json.get("iconType").is_some());
        assert!(json["iconType"].is_null());
        assert!(json["icon"].is_null());
    }

    #[test]
    fn untitled_project_omits_title_key() {
        let record = ProjectRecord {
            id: 1,
            title: None,
            subtitle: None,
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            tech: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            image_layout: DEFAULT_IMAGE_LAYOUT.to_string(),
            github_url: None,
            live_url: None,
        };
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("title").is_none());
        assert!(json["subtitle"].is_null());
        assert_eq!(json["image_layout"], "grid");
    }
}
