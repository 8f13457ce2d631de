//! Media discovery inside a project directory.

use std::collections::HashSet;
use std::path::Path;

use crate::config::MediaConfig;
use crate::error::{Error, Result};
use crate::io;
use crate::record::MediaAsset;
use crate::token;

/// Images and videos found for one project, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectAssets {
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
}

/// Suffix marking a file as the poster frame of a same-named video.
pub const THUMB_SUFFIX: &str = "-thumb";

/// Classify the files in `dir` into images and videos.
///
/// `folder` is the project's directory name as it appears in public paths.
/// A thumbnail claimed by a video is not repeated in the image list.
pub fn scan_assets(dir: &Path, folder: &str, media: &MediaConfig) -> Result<ProjectAssets> {
    let entries =
        io::list_dir(dir).map_err(|e| Error::assets_scan_failed(dir.display().to_string(), e))?;

    let files: Vec<&str> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.name.as_str())
        .collect();
    let present: HashSet<&str> = files.iter().copied().collect();

    let mut videos = Vec::new();
    let mut claimed: HashSet<String> = HashSet::new();

    for name in &files {
        if !token::has_extension(Path::new(name), &media.video_extensions) {
            continue;
        }
        let thumb = find_thumbnail(name, &present, &media.thumbnail_extensions);
        let thumbnail = thumb.as_ref().map(|t| public_path(&media.prefix, folder, t));
        if let Some(t) = thumb {
            claimed.insert(t);
        }
        videos.push(MediaAsset {
            path: public_path(&media.prefix, folder, name),
            thumbnail,
        });
    }

    let images = files
        .iter()
        .filter(|name| token::has_extension(Path::new(name), &media.image_extensions))
        .filter(|name| !claimed.contains(**name))
        .map(|name| MediaAsset {
            path: public_path(&media.prefix, folder, name),
            thumbnail: None,
        })
        .collect();

    Ok(ProjectAssets { images, videos })
}

/// Try `<base>-thumb.<ext>` for each extension in order.
fn find_thumbnail(video: &str, present: &HashSet<&str>, extensions: &[String]) -> Option<String> {
    let base = Path::new(video).file_stem()?.to_str()?;

    extensions
        .iter()
        .map(|ext| format!("{}{}.{}", base, THUMB_SUFFIX, ext))
        .find(|candidate| present.contains(candidate.as_str()))
}

/// Public URL for a file inside a project folder.
pub fn public_path(prefix: &str, folder: &str, file: &str) -> String {
    token::join_url(prefix, &[folder, file])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"x").unwrap();
        }
    }

    #[test]
    fn classifies_by_extension_case_insensitively() {
        let dir = tempdir().unwrap();
        touch(
            dir.path(),
            &["b.PNG", "a.jpg", "clip.MP4", "notes.txt", "info.md"],
        );
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        let media = FolioConfig::default().media;

        let assets = scan_assets(dir.path(), "alpha", &media).unwrap();

        let images: Vec<_> = assets.images.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(images, vec!["/projects/alpha/a.jpg", "/projects/alpha/b.PNG"]);
        assert!(assets.images.iter().all(|a| a.thumbnail.is_none()));
        assert_eq!(assets.videos.len(), 1);
        assert_eq!(assets.videos[0].path, "/projects/alpha/clip.MP4");
        assert!(assets.videos[0].thumbnail.is_none());
    }

    #[test]
    fn video_thumbnail_sibling_is_resolved() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["demo.mp4", "demo-thumb.png", "cover.jpg"]);
        let media = FolioConfig::default().media;

        let assets = scan_assets(dir.path(), "alpha", &media).unwrap();

        assert_eq!(
            assets.videos[0].thumbnail.as_deref(),
            Some("/projects/alpha/demo-thumb.png")
        );
        let images: Vec<_> = assets.images.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(images, vec!["/projects/alpha/cover.jpg"]);
    }

    #[test]
    fn thumbnail_extension_order_wins() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["demo.webm", "demo-thumb.png", "demo-thumb.jpg"]);
        let media = FolioConfig::default().media;

        let assets = scan_assets(dir.path(), "beta", &media).unwrap();

        assert_eq!(
            assets.videos[0].thumbnail.as_deref(),
            Some("/projects/beta/demo-thumb.jpg")
        );
        // the losing candidate stays a regular image
        assert_eq!(assets.images.len(), 1);
        assert_eq!(assets.images[0].path, "/projects/beta/demo-thumb.png");
    }

    #[test]
    fn unreadable_directory_is_scan_error() {
        let dir = tempdir().unwrap();
        let media = FolioConfig::default().media;

        let err = scan_assets(&dir.path().join("gone"), "gone", &media).unwrap_err();
        assert_eq!(err.code.as_str(), "assets.scan_failed");
    }
}
