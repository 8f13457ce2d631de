//! Per-project metadata files.
//!
//! A sidecar is either a markdown file with a YAML frontmatter block
//! (`info.md`) or a plain YAML document (`project.yaml`). Text fields take
//! any YAML scalar as its source text, so `1.50` stays `1.50` and unquoted
//! dates and years survive as written.

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io;
use crate::token;

/// Metadata recognized in a sidecar file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMeta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub tech: Vec<String>,
    pub image_layout: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    /// Markdown body following the frontmatter block, if any.
    pub body: Option<String>,
}

/// Locate the first existing sidecar in `dir` from the candidate names.
pub fn find_sidecar(dir: &Path, names: &[String]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Read and parse the sidecar for one project directory.
pub fn read_sidecar(dir: &Path, names: &[String]) -> Result<(PathBuf, ProjectMeta)> {
    let path = find_sidecar(dir, names)
        .ok_or_else(|| Error::sidecar_missing(dir.display().to_string(), names))?;

    let content = io::read_file(&path, &format!("read {}", path.display()))?;
    let meta = parse_sidecar(&content)
        .map_err(|e| Error::sidecar_invalid_yaml(path.display().to_string(), e))?;

    Ok((path, meta))
}

/// Split `---` delimited frontmatter from the markdown body.
///
/// Returns `None` when the content has no closed frontmatter block.
pub fn split_frontmatter(input: &str) -> Option<(String, String)> {
    let mut lines = input.lines();

    let first = lines.next()?.trim_start_matches('\u{feff}').trim_end();
    if first != "---" {
        return None;
    }

    let mut yaml_lines: Vec<&str> = Vec::new();
    let mut closed = false;

    for line in lines.by_ref() {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            closed = true;
            break;
        }
        yaml_lines.push(line);
    }

    if !closed {
        return None;
    }

    let body = lines.collect::<Vec<_>>().join("\n");
    Some((yaml_lines.join("\n"), body))
}

/// Recognized sidecar keys as they appear in the YAML document.
///
/// `String` fields are filled from the scalar's source text rather than its
/// resolved YAML type. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMeta {
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    tech: Option<serde_yml::Value>,
    image_layout: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
}

/// Parse sidecar content (frontmatter markdown or plain YAML).
pub fn parse_sidecar(content: &str) -> std::result::Result<ProjectMeta, String> {
    let (yaml, body) = match split_frontmatter(content) {
        Some((yaml, body)) => (yaml, Some(body)),
        None => (content.trim_start_matches('\u{feff}').to_string(), None),
    };

    let raw = parse_raw_meta(&yaml)?;
    let tech = match raw.tech {
        Some(value) => {
            let value: Value = serde_json::to_value(value).map_err(|e| e.to_string())?;
            tech_names(&value)
        }
        None => Vec::new(),
    };

    let body = body
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty());

    Ok(ProjectMeta {
        title: raw.title,
        subtitle: non_empty(raw.subtitle),
        description: raw.description,
        start_date: raw.start_date,
        end_date: raw.end_date,
        tech,
        image_layout: non_empty(raw.image_layout),
        github_url: non_empty(raw.github_url),
        live_url: non_empty(raw.live_url),
        body,
    })
}

/// An empty or comment-only document has no fields.
fn parse_raw_meta(yaml: &str) -> std::result::Result<RawMeta, String> {
    let has_content = yaml
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(RawMeta::default());
    }

    serde_yml::from_str(yaml).map_err(|e| e.to_string())
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `tech` is a comma-delimited string; a YAML list of names is accepted too.
fn tech_names(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_string)
            .flat_map(|item| token::split_list(&item))
            .collect(),
        other => scalar_string(other)
            .map(|s| token::split_list(&s))
            .unwrap_or_default(),
    }
}
