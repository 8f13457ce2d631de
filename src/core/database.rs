//! Database-source pipeline.
//!
//! Bootstraps the store, joins `projects` against the technology catalog,
//! and writes the manifest. Any store failure aborts the whole run.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::manifest::{self, OutputDir};
use crate::output::{BuildSummary, ProjectOutcome, Source};
use crate::paths::BuildPaths;
use crate::record::DbProjectRecord;
use crate::store::{BootstrapReport, ProjectRow, Store};
use crate::tech::{self, TechCatalog};

/// Build summary plus what the bootstrap step did to the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbBuildSummary {
    #[serde(flatten)]
    pub summary: BuildSummary,
    pub database: String,
    pub bootstrap: BootstrapReport,
}

/// Join one row against the catalog.
pub fn assemble(id: u32, row: ProjectRow, catalog: &TechCatalog) -> DbProjectRecord {
    let names = row
        .tech
        .as_deref()
        .map(tech::parse_tech_list)
        .unwrap_or_default();

    DbProjectRecord {
        id,
        title: row.title.unwrap_or_default(),
        description: row.description.unwrap_or_default(),
        image: row.image.filter(|i| !i.trim().is_empty()),
        tech: catalog.resolve(&names),
        start_date: row.start_date.unwrap_or_default(),
        end_date: row.end_date.unwrap_or_default(),
    }
}

/// Assemble every row; rows without a title are skipped.
pub fn collect_projects(
    rows: Vec<ProjectRow>,
    catalog: &TechCatalog,
) -> Vec<(String, ProjectOutcome<DbProjectRecord>)> {
    let mut next_id = 1;

    rows.into_iter()
        .map(|row| {
            let label = format!("projects#{}", row.id);
            if row.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
                let err = Error::validation_invalid_argument("title", "Project row has no title");
                log_error!("db", "Skipping {}: {}", label, err);
                return (label, ProjectOutcome::Skipped(err));
            }
            let record = assemble(next_id, row, catalog);
            next_id += 1;
            (label, ProjectOutcome::Built(record))
        })
        .collect()
}

/// Run the database pipeline end to end.
pub fn run(paths: &BuildPaths, dry_run: bool) -> Result<DbBuildSummary> {
    log_status!("db", "Opening {}", paths.database.display());
    let mut store = Store::open(&paths.database)?;
    let summary = build(&mut store, paths, dry_run)?;
    store.close()?;
    Ok(summary)
}

/// Bootstrap, read, and write using an already open store.
pub fn build(store: &mut Store, paths: &BuildPaths, dry_run: bool) -> Result<DbBuildSummary> {
    let bootstrap = store.bootstrap()?;
    if !bootstrap.created.is_empty() {
        log_status!("db", "Created tables: {}", bootstrap.created.join(", "));
    }

    let catalog = store.load_catalog()?;
    let rows = store.load_projects()?;
    log_status!(
        "db",
        "Loaded {} projects and {} technologies",
        rows.len(),
        catalog.len()
    );

    let mut summary = BuildSummary::new(Source::Database, paths.output.display().to_string());
    summary.dry_run = dry_run;
    let records = summary.collect(collect_projects(rows, &catalog));

    if !dry_run {
        manifest::write_manifest(&paths.output, records, OutputDir::Create)?;
        summary.written = true;
    }

    Ok(DbBuildSummary {
        summary,
        database: store.path().display().to_string(),
        bootstrap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech::TechIcon;

    fn row(id: i64, title: Option<&str>, tech: Option<&str>) -> ProjectRow {
        ProjectRow {
            id,
            title: title.map(str::to_string),
            tech: tech.map(str::to_string),
            ..ProjectRow::default()
        }
    }

    fn catalog() -> TechCatalog {
        vec![(
            "React".to_string(),
            TechIcon {
                icon_path: Some("/icons/react.svg".to_string()),
                icon_type: Some("svg".to_string()),
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn assemble_defaults_null_columns() {
        let record = assemble(3, row(10, Some("T"), None), &catalog());

        assert_eq!(record.id, 3);
        assert_eq!(record.description, "");
        assert_eq!(record.start_date, "");
        assert!(record.image.is_none());
        assert!(record.tech.is_empty());
    }

    #[test]
    fn tech_join_is_case_insensitive() {
        let record = assemble(1, row(1, Some("T"), Some("react , Unknown")), &catalog());

        assert_eq!(record.tech.len(), 2);
        assert_eq!(record.tech[0].name, "react");
        assert_eq!(record.tech[0].icon_type.as_deref(), Some("svg"));
        assert!(record.tech[1].icon.is_none());
        assert!(record.tech[1].icon_type.is_none());
    }

    #[test]
    fn untitled_rows_are_skipped_without_consuming_ids() {
        let rows = vec![
            row(1, Some("One"), None),
            row(2, None, None),
            row(5, Some("Three"), None),
        ];

        let outcomes = collect_projects(rows, &catalog());

        assert_eq!(outcomes[1].0, "projects#2");
        assert!(matches!(outcomes[1].1, ProjectOutcome::Skipped(_)));
        match &outcomes[2].1 {
            ProjectOutcome::Built(r) => assert_eq!(r.id, 2),
            ProjectOutcome::Skipped(_) => panic!("expected built record"),
        }
    }
}
