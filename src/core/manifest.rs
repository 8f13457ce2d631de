//! Manifest ordering and serialization.

use serde::Serialize;
use std::cmp::Ordering;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io;
use crate::record::Identified;

/// How the writer treats a missing output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDir {
    /// Fail if the parent directory does not exist.
    MustExist,
    /// Create the parent directory first.
    Create,
}

/// Order for the manifest: end date descending, undated last.
///
/// Dates compare as strings. Callers rely on `sort_by` being stable so
/// ties keep their assignment order.
pub fn compare_end_dates(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.cmp(a),
    }
}

pub fn sort_records<T: Identified>(records: &mut [T]) {
    records.sort_by(|a, b| compare_end_dates(a.end_date(), b.end_date()));
}

/// Pretty-printed JSON array with a trailing newline.
pub fn render<T: Serialize>(records: &[T]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize manifest".to_string()))
    })?;
    json.push('\n');
    Ok(json)
}

/// Sort, serialize, and overwrite the manifest at `path`.
pub fn write_manifest<T>(path: &Path, mut records: Vec<T>, dir: OutputDir) -> Result<usize>
where
    T: Identified + Serialize,
{
    sort_records(&mut records);
    let json = render(&records)?;

    if dir == OutputDir::Create {
        if let Some(parent) = path.parent() {
            io::ensure_dir(parent)?;
        }
    }

    io::write_file(path, &json, &format!("write {}", path.display()))?;
    log_status!("manifest", "Wrote {} projects to {}", records.len(), path.display());

    Ok(records.len())
}
