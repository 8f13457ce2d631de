//! Technology name to icon resolution.

use std::collections::HashMap;
use std::path::Path;

use crate::config::IconConfig;
use crate::record::{DbTechEntry, TechEntry};
use crate::token;

/// Split a comma-delimited technology string into trimmed, non-empty names.
pub fn parse_tech_list(value: &str) -> Vec<String> {
    token::split_list(value)
}

/// Resolve icons by probing `<icons_dir>/<lowercased-name>.<ext>`.
pub fn resolve_file_icons(names: &[String], icons_dir: &Path, icons: &IconConfig) -> Vec<TechEntry> {
    names
        .iter()
        .map(|name| TechEntry {
            name: name.clone(),
            icon: find_icon(name, icons_dir, icons),
        })
        .collect()
}

fn find_icon(name: &str, icons_dir: &Path, icons: &IconConfig) -> Option<String> {
    let stem = token::normalize_key(name);

    icons
        .extensions
        .iter()
        .map(|ext| format!("{}.{}", stem, ext))
        .find(|file| icons_dir.join(file).is_file())
        .map(|file| token::join_url(&icons.prefix, &[file.as_str()]))
}

/// Icon data for one row of the `technologies` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechIcon {
    pub icon_path: Option<String>,
    pub icon_type: Option<String>,
}

/// Pre-loaded technology lookup keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct TechCatalog {
    entries: HashMap<String, TechIcon>,
}

impl TechCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, icon: TechIcon) {
        self.entries.insert(token::normalize_key(name), icon);
    }

    pub fn get(&self, name: &str) -> Option<&TechIcon> {
        self.entries.get(&token::normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join names against the catalog; unmatched names get null icon and type.
    pub fn resolve(&self, names: &[String]) -> Vec<DbTechEntry> {
        names
            .iter()
            .map(|name| match self.get(name) {
                Some(found) => DbTechEntry {
                    name: name.clone(),
                    icon: found.icon_path.clone(),
                    icon_type: found.icon_type.clone(),
                },
                None => DbTechEntry {
                    name: name.clone(),
                    icon: None,
                    icon_type: None,
                },
            })
            .collect()
    }
}

impl FromIterator<(String, TechIcon)> for TechCatalog {
    fn from_iter<I: IntoIterator<Item = (String, TechIcon)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, icon) in iter {
            catalog.insert(&name, icon);
        }
        catalog
    }
}
