//! SQLite project store.
//!
//! One connection is held for the whole run and closed explicitly on the
//! success path.

pub mod schema;
pub mod seed;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io;
use crate::tech::{TechCatalog, TechIcon};

pub use schema::{bootstrap, BootstrapReport};

/// Raw `projects` row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tech: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the database file, creating its directory if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            io::ensure_dir(parent)
                .map_err(|e| Error::database_unavailable(path.display().to_string(), e))?;
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::database_unavailable(path.display().to_string(), e))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database_unavailable(":memory:", e))?;

        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run the schema bootstrap/migration step.
    pub fn bootstrap(&mut self) -> Result<BootstrapReport> {
        schema::bootstrap(&mut self.conn)
    }

    /// All project rows in id order.
    pub fn load_projects(&self) -> Result<Vec<ProjectRow>> {
        let context = || Some("load projects".to_string());

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, description, image, tech, start_date, end_date
                 FROM projects ORDER BY id",
            )
            .map_err(|e| Error::database_query(e, context()))?;

        let rows = stmt
            .query_map([], row_to_project)
            .map_err(|e| Error::database_query(e, context()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::database_query(e, context()))?;

        Ok(rows)
    }

    /// The technology lookup table keyed by lowercased name.
    pub fn load_catalog(&self) -> Result<TechCatalog> {
        let context = || Some("load technologies".to_string());

        let mut stmt = self
            .conn
            .prepare("SELECT name, icon_path, icon_type FROM technologies ORDER BY id")
            .map_err(|e| Error::database_query(e, context()))?;

        let catalog = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    TechIcon {
                        icon_path: text(row, 1)?,
                        icon_type: text(row, 2)?,
                    },
                ))
            })
            .map_err(|e| Error::database_query(e, context()))?
            .collect::<rusqlite::Result<TechCatalog>>()
            .map_err(|e| Error::database_query(e, context()))?;

        Ok(catalog)
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| Error::database_query(e, Some("close connection".to_string())))
    }
}

fn row_to_project(row: &Row) -> rusqlite::Result<ProjectRow> {
    Ok(ProjectRow {
        id: row.get(0)?,
        title: text(row, 1)?,
        description: text(row, 2)?,
        image: text(row, 3)?,
        tech: text(row, 4)?,
        start_date: text(row, 5)?,
        end_date: text(row, 6)?,
    })
}

/// Read a column as text whatever its storage class; NULL stays `None`.
fn text(row: &Row, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("portfolio.db");

        let store = Store::open(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        store.close().unwrap();
    }

    #[test]
    fn rows_come_back_in_id_order() {
        let mut store = Store::open_in_memory().unwrap();
        store.bootstrap().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO projects (title, end_date) VALUES ('Numbers', 2021)",
                [],
            )
            .unwrap();

        let rows = store.load_projects().unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].title.as_deref(), Some("Portfolio Site"));
        assert_eq!(rows[3].end_date.as_deref(), Some("2021"));
        assert!(rows[3].image.is_none());
    }

    #[test]
    fn catalog_covers_seeded_technologies() {
        let mut store = Store::open_in_memory().unwrap();
        store.bootstrap().unwrap();

        let catalog = store.load_catalog().unwrap();

        assert_eq!(catalog.len(), seed::TECHNOLOGIES.len());
        let node = catalog.get("node.js").unwrap();
        assert_eq!(node.icon_path.as_deref(), Some("/icons/nodejs.svg"));
        assert_eq!(node.icon_type.as_deref(), Some("svg"));
    }
}
