//! Table creation and the legacy `technologies` migration.
//!
//! Bootstrapping is a separate step that runs once before any read. Every
//! operation here is idempotent: a current store passes through unchanged.

use rusqlite::{params, Connection};
use serde::Serialize;

use super::seed;
use crate::error::{Error, Result};

pub const PROJECTS_TABLE: &str = "projects";
pub const TECHNOLOGIES_TABLE: &str = "technologies";

const CREATE_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    image TEXT,
    tech TEXT,
    start_date TEXT,
    end_date TEXT,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_TECHNOLOGIES: &str = "CREATE TABLE IF NOT EXISTS technologies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    icon_path TEXT,
    icon_type TEXT,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
)";

/// What bootstrapping changed in the store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapReport {
    pub created: Vec<String>,
    pub migrated: Vec<String>,
    pub seeded_technologies: usize,
    pub seeded_projects: usize,
}

impl BootstrapReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.migrated.is_empty()
    }
}

/// Column metadata from `pragma_table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub not_null: bool,
}

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )
        .map_err(|e| Error::database_query(e, Some(format!("check table {}", table))))?;
    Ok(count > 0)
}

pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let context = || Some(format!("inspect table {}", table));

    let mut stmt = conn
        .prepare("SELECT name, \"notnull\" FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(|e| Error::database_query(e, context()))?;

    let columns = stmt
        .query_map(params![table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                not_null: row.get::<_, i64>(1)? != 0,
            })
        })
        .map_err(|e| Error::database_query(e, context()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::database_query(e, context()))?;

    Ok(columns)
}

fn find<'a>(columns: &'a [ColumnInfo], name: &str) -> Option<&'a ColumnInfo> {
    columns.iter().find(|c| c.name == name)
}

/// A legacy `technologies` table requires `icon_path` or lacks `icon_type`.
pub fn is_legacy_technologies(columns: &[ColumnInfo]) -> bool {
    let icon_path_required = find(columns, "icon_path").is_some_and(|c| c.not_null);
    let missing_icon_type = find(columns, "icon_type").is_none();
    icon_path_required || missing_icon_type
}

/// Create missing tables, migrate the legacy shape, and seed fresh tables.
pub fn bootstrap(conn: &mut Connection) -> Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    let had_technologies = table_exists(conn, TECHNOLOGIES_TABLE)?;
    let had_projects = table_exists(conn, PROJECTS_TABLE)?;

    if had_technologies {
        let columns = table_columns(conn, TECHNOLOGIES_TABLE)?;
        if is_legacy_technologies(&columns) {
            migrate_technologies(conn, &columns)?;
            report.migrated.push(TECHNOLOGIES_TABLE.to_string());
            log_status!("db", "Migrated legacy technologies table");
        }
    }

    conn.execute_batch(&format!("{};\n{};", CREATE_TECHNOLOGIES, CREATE_PROJECTS))
        .map_err(|e| Error::database_schema("Failed to create tables", Some(e.to_string())))?;

    if !had_technologies {
        report.created.push(TECHNOLOGIES_TABLE.to_string());
        report.seeded_technologies = seed::seed_technologies(conn)?;
    }
    if !had_projects {
        report.created.push(PROJECTS_TABLE.to_string());
        report.seeded_projects = seed::seed_projects(conn)?;
    }

    verify(conn)?;

    Ok(report)
}

/// Rebuild `technologies` in the current shape, keeping every row.
///
/// Placeholder empty icon paths become NULL. A missing `icon_type` is
/// inferred from the icon file extension.
fn migrate_technologies(conn: &mut Connection, columns: &[ColumnInfo]) -> Result<()> {
    let has = |name: &str| find(columns, name).is_some();

    let id = if has("id") { "id" } else { "NULL" };
    let icon_path = if has("icon_path") {
        "NULLIF(icon_path, '')"
    } else {
        "NULL"
    };
    let icon_type = if has("icon_type") {
        "icon_type".to_string()
    } else if has("icon_path") {
        "CASE \
            WHEN lower(icon_path) LIKE '%.svg' THEN 'svg' \
            WHEN lower(icon_path) LIKE '%.png' THEN 'png' \
            WHEN lower(icon_path) LIKE '%.jpg' OR lower(icon_path) LIKE '%.jpeg' THEN 'jpg' \
            WHEN lower(icon_path) LIKE '%.webp' THEN 'webp' \
            ELSE NULL END"
            .to_string()
    } else {
        "NULL".to_string()
    };
    let created_at = if has("created_at") {
        "created_at"
    } else {
        "CURRENT_TIMESTAMP"
    };

    let sql = format!(
        "ALTER TABLE technologies RENAME TO technologies_legacy;
         {create};
         INSERT INTO technologies (id, name, icon_path, icon_type, created_at)
             SELECT {id}, name, {icon_path}, {icon_type}, {created_at} FROM technologies_legacy;
         DROP TABLE technologies_legacy;",
        create = CREATE_TECHNOLOGIES,
    );

    let tx = conn
        .transaction()
        .map_err(|e| Error::database_schema("Failed to start migration", Some(e.to_string())))?;
    tx.execute_batch(&sql).map_err(|e| {
        Error::database_schema("Failed to migrate technologies table", Some(e.to_string()))
    })?;
    tx.commit()
        .map_err(|e| Error::database_schema("Failed to commit migration", Some(e.to_string())))?;

    Ok(())
}

/// Post-condition: both tables exist and `technologies` is in the current shape.
pub fn verify(conn: &Connection) -> Result<()> {
    for table in [TECHNOLOGIES_TABLE, PROJECTS_TABLE] {
        if !table_exists(conn, table)? {
            return Err(Error::database_schema(
                format!("Table {} is missing after bootstrap", table),
                None,
            ));
        }
    }

    let columns = table_columns(conn, TECHNOLOGIES_TABLE)?;
    if is_legacy_technologies(&columns) {
        return Err(Error::database_schema(
            "technologies table is still in the legacy shape",
            None,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE technologies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                icon_path TEXT NOT NULL
            );
            INSERT INTO technologies (name, icon_path) VALUES ('React', '/icons/react.svg');
            INSERT INTO technologies (name, icon_path) VALUES ('Haskell', '');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn fresh_store_is_created_and_seeded() {
        let mut conn = Connection::open_in_memory().unwrap();

        let report = bootstrap(&mut conn).unwrap();

        assert_eq!(report.created, vec!["technologies", "projects"]);
        assert!(report.migrated.is_empty());
        assert_eq!(report.seeded_projects, 3);
        assert_eq!(report.seeded_technologies, seed::TECHNOLOGIES.len());
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        bootstrap(&mut conn).unwrap();

        let second = bootstrap(&mut conn).unwrap();

        assert!(second.is_noop());
        assert_eq!(second.seeded_projects, 0);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM projects", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn legacy_technologies_are_migrated() {
        let mut conn = legacy_store();
        assert!(is_legacy_technologies(
            &table_columns(&conn, TECHNOLOGIES_TABLE).unwrap()
        ));

        let report = bootstrap(&mut conn).unwrap();

        assert_eq!(report.migrated, vec!["technologies"]);
        assert_eq!(report.created, vec!["projects"]);
        assert_eq!(report.seeded_technologies, 0);

        let columns = table_columns(&conn, TECHNOLOGIES_TABLE).unwrap();
        assert!(!is_legacy_technologies(&columns));

        let (icon_type, haskell_icon): (Option<String>, Option<String>) = conn
            .query_row(
                "SELECT
                    (SELECT icon_type FROM technologies WHERE name = 'React'),
                    (SELECT icon_path FROM technologies WHERE name = 'Haskell')",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(icon_type.as_deref(), Some("svg"));
        assert!(haskell_icon.is_none());

        let again = bootstrap(&mut conn).unwrap();
        assert!(again.is_noop());
    }
}
