//! Path resolution against an explicit base directory.
//!
//! Nothing here consults the process working directory; callers pass the
//! base directory in and every relative setting is joined onto it.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::FolioConfig;

pub const CONFIG_FILE: &str = "folio.json";

/// folio.json path for a base directory
pub fn config_file(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE)
}

/// Resolve `value` against `base_dir` unless it is already absolute.
pub fn resolve(base_dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Fully resolved locations for one build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPaths {
    pub base_dir: PathBuf,
    pub projects_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub output: PathBuf,
    pub database: PathBuf,
}

impl BuildPaths {
    pub fn from_config(base_dir: &Path, config: &FolioConfig) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            projects_dir: resolve(base_dir, &config.projects_dir),
            icons_dir: resolve(base_dir, &config.icons_dir),
            output: resolve(base_dir, &config.output),
            database: resolve(base_dir, &config.database),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_settings_join_base_dir() {
        let config = FolioConfig::default();
        let paths = BuildPaths::from_config(Path::new("/site"), &config);

        assert_eq!(paths.projects_dir, PathBuf::from("/site/public/projects"));
        assert_eq!(paths.output, PathBuf::from("/site/src/data/projects.json"));
        assert_eq!(paths.database, PathBuf::from("/site/data/portfolio.db"));
    }

    #[test]
    fn absolute_settings_are_kept() {
        assert_eq!(resolve(Path::new("/site"), "/var/out.json"), PathBuf::from("/var/out.json"));
    }
}
