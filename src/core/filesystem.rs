//! Filesystem-source pipeline.
//!
//! One subdirectory of the projects root is one project. Failures are
//! scoped: a bad sidecar skips that project, a failed asset scan leaves it
//! without media, and only a missing projects root aborts the build.

use std::path::Path;

use crate::assets::{self, ProjectAssets};
use crate::config::FolioConfig;
use crate::error::{Error, Result};
use crate::io;
use crate::manifest::{self, OutputDir};
use crate::output::{BuildSummary, ProjectOutcome, Source};
use crate::paths::BuildPaths;
use crate::record::{ProjectRecord, DEFAULT_IMAGE_LAYOUT};
use crate::sidecar::{self, ProjectMeta};
use crate::tech;

/// Build a record from parsed metadata and the project's directory.
pub fn assemble(
    id: u32,
    folder: &str,
    dir: &Path,
    meta: ProjectMeta,
    paths: &BuildPaths,
    config: &FolioConfig,
) -> ProjectRecord {
    let ProjectAssets { images, videos } = match assets::scan_assets(dir, folder, &config.media) {
        Ok(found) => found,
        Err(e) => {
            log_error!("fs", "{}: {}", folder, e);
            ProjectAssets::default()
        }
    };

    let tech = tech::resolve_file_icons(&meta.tech, &paths.icons_dir, &config.icons);

    ProjectRecord {
        id,
        title: meta.title,
        subtitle: meta.subtitle,
        description: meta.description.or(meta.body).unwrap_or_default(),
        start_date: meta.start_date.unwrap_or_default(),
        end_date: meta.end_date.unwrap_or_default(),
        tech,
        images,
        videos,
        image_layout: meta
            .image_layout
            .unwrap_or_else(|| DEFAULT_IMAGE_LAYOUT.to_string()),
        github_url: meta.github_url,
        live_url: meta.live_url,
    }
}

/// Enumerate project directories and assemble each one.
///
/// Ids are assigned densely to the projects that assemble, in directory
/// order. Hidden directories are ignored.
pub fn collect_projects(
    paths: &BuildPaths,
    config: &FolioConfig,
) -> Result<Vec<(String, ProjectOutcome<ProjectRecord>)>> {
    let root = &paths.projects_dir;
    if !root.is_dir() {
        return Err(Error::projects_root_missing(root.display().to_string()));
    }

    let entries = io::list_dir(root)?;
    let mut outcomes = Vec::new();
    let mut next_id = 1;

    for entry in entries {
        if !entry.is_dir || entry.name.starts_with('.') {
            continue;
        }

        let outcome = match sidecar::read_sidecar(&entry.path, &config.sidecar_names) {
            Ok((sidecar_path, meta)) => {
                if meta.title.is_none() {
                    log_status!("fs", "{} has no title", sidecar_path.display());
                }
                let record = assemble(next_id, &entry.name, &entry.path, meta, paths, config);
                next_id += 1;
                ProjectOutcome::Built(record)
            }
            Err(e) => {
                log_error!("fs", "Skipping {}: {}", entry.name, e);
                ProjectOutcome::Skipped(e)
            }
        };

        outcomes.push((entry.name, outcome));
    }

    Ok(outcomes)
}

/// Run the filesystem pipeline end to end.
///
/// With `dry_run`, records are built and counted but the manifest is left
/// untouched.
pub fn run(paths: &BuildPaths, config: &FolioConfig, dry_run: bool) -> Result<BuildSummary> {
    log_status!("fs", "Scanning {}", paths.projects_dir.display());

    let mut summary = BuildSummary::new(Source::Filesystem, paths.output.display().to_string());
    summary.dry_run = dry_run;

    let outcomes = collect_projects(paths, config)?;
    let records = summary.collect(outcomes);

    if dry_run {
        return Ok(summary);
    }

    manifest::write_manifest(&paths.output, records, OutputDir::MustExist)?;
    summary.written = true;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, BuildPaths, FolioConfig) {
        let dir = tempdir().unwrap();
        let config = FolioConfig::default();
        let paths = BuildPaths::from_config(dir.path(), &config);
        fs::create_dir_all(&paths.projects_dir).unwrap();
        fs::create_dir_all(&paths.icons_dir).unwrap();
        (dir, paths, config)
    }

    fn project(paths: &BuildPaths, folder: &str, sidecar: Option<&str>) -> std::path::PathBuf {
        let dir = paths.projects_dir.join(folder);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = sidecar {
            fs::write(dir.join("info.md"), content).unwrap();
        }
        dir
    }

    #[test]
    fn assemble_applies_defaults() {
        let (_dir, paths, config) = setup();
        let dir = project(&paths, "bare", None);
        let meta = ProjectMeta {
            title: Some("Bare".to_string()),
            ..ProjectMeta::default()
        };

        let record = assemble(7, "bare", &dir, meta, &paths, &config);

        assert_eq!(record.id, 7);
        assert_eq!(record.description, "");
        assert_eq!(record.end_date, "");
        assert_eq!(record.image_layout, "grid");
        assert!(record.subtitle.is_none());
        assert!(record.tech.is_empty());
    }

    #[test]
    fn markdown_body_fills_missing_description() {
        let (_dir, paths, config) = setup();
        let dir = project(&paths, "doc", None);
        let meta = sidecar::parse_sidecar("---\ntitle: Doc\n---\nLong form text.\n").unwrap();

        let record = assemble(1, "doc", &dir, meta, &paths, &config);
        assert_eq!(record.description, "Long form text.");
    }

    #[test]
    fn skipped_directories_do_not_consume_ids() {
        let (_dir, paths, config) = setup();
        project(&paths, "a-first", Some("---\ntitle: First\n---\n"));
        project(&paths, "b-broken", None);
        project(&paths, "c-third", Some("---\ntitle: Third\n---\n"));
        project(&paths, ".hidden", Some("---\ntitle: Hidden\n---\n"));
        fs::write(paths.projects_dir.join("stray.txt"), "x").unwrap();

        let outcomes = collect_projects(&paths, &config).unwrap();

        assert_eq!(outcomes.len(), 3);
        let built: Vec<(String, u32)> = outcomes
            .iter()
            .filter_map(|(folder, o)| match o {
                ProjectOutcome::Built(r) => Some((folder.clone(), r.id)),
                ProjectOutcome::Skipped(_) => None,
            })
            .collect();
        assert_eq!(
            built,
            vec![("a-first".to_string(), 1), ("c-third".to_string(), 2)]
        );
    }

    #[test]
    fn missing_root_aborts() {
        let dir = tempdir().unwrap();
        let config = FolioConfig::default();
        let paths = BuildPaths::from_config(dir.path(), &config);

        let err = run(&paths, &config, false).unwrap_err();
        assert_eq!(err.code.as_str(), "projects.root_missing");
        assert!(!paths.output.exists());
    }

    #[test]
    fn dry_run_leaves_output_untouched() {
        let (_dir, paths, config) = setup();
        project(&paths, "alpha", Some("---\ntitle: Alpha\n---\n"));

        let summary = run(&paths, &config, true).unwrap();

        assert_eq!(summary.built, 1);
        assert!(!summary.written);
        assert!(!paths.output.exists());
    }
}
