//! Public output types for folio command responses.

use serde::Serialize;

use crate::error::Error;

/// Which pipeline produced a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Filesystem,
    Database,
}

/// Result of assembling one project: a record, or the reason it was skipped.
#[derive(Debug, Clone)]
pub enum ProjectOutcome<T> {
    Built(T),
    Skipped(Error),
}

// ============================================================================
// Build Summary
// ============================================================================

/// Summary of one manifest build.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    pub output: String,
    pub written: bool,
    pub dry_run: bool,
    pub built: u32,
    pub skipped: u32,
    pub items: Vec<BuildItem>,
}

/// Individual project result within a build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildItem {
    pub source: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BuildSummary {
    pub fn new(source: Source, output: impl Into<String>) -> Self {
        Self {
            source: Some(source),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn record_built(&mut self, source: String, id: u32) {
        self.built += 1;
        self.items.push(BuildItem {
            source,
            status: "built".to_string(),
            id: Some(id),
            error: None,
        });
    }

    pub fn record_skipped(&mut self, source: String, error: &Error) {
        self.skipped += 1;
        self.items.push(BuildItem {
            source,
            status: "skipped".to_string(),
            id: None,
            error: Some(error.to_string()),
        });
    }

    /// Collect built records, tallying every outcome in order.
    ///
    /// Each outcome is paired with a label naming its source (folder or row).
    pub fn collect<T>(&mut self, outcomes: Vec<(String, ProjectOutcome<T>)>) -> Vec<T>
    where
        T: crate::record::Identified,
    {
        let mut records = Vec::new();
        for (source, outcome) in outcomes {
            match outcome {
                ProjectOutcome::Built(record) => {
                    self.record_built(source, record.id());
                    records.push(record);
                }
                ProjectOutcome::Skipped(error) => {
                    self.record_skipped(source, &error);
                }
            }
        }
        records
    }
}
