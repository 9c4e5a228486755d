//! Record store for grantdesk.
//!
//! This module provides the `SQLite`-backed accessor for maintainer and
//! applicant records: list, delete, aggregate counts, course grouping, and
//! retrieval of the binary document sets attached to maintainers.
//!
//! Every operation returns a typed `Result`; the decision to degrade a
//! fault (the dashboard's never-crash policy) belongs to the caller, not
//! this layer.

pub mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::records::{Applicant, AttachmentSet, ClaimStatus, Maintainer, StatusBucket};

/// Which entity table a course grouping runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseTable {
    /// The `Applicants` table.
    Applicants,
    /// The `Maintainer` table.
    Maintainers,
}

impl CourseTable {
    /// The fixed table name this variant queries.
    #[must_use]
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Applicants => "Applicants",
            Self::Maintainers => "Maintainer",
        }
    }
}

/// A course label and the number of records enrolled in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCount {
    /// Course label, or `"Unknown"` for NULL/empty stored values.
    pub course: String,
    /// Number of records in the course.
    pub count: i64,
}

/// Label used for NULL or empty course values in groupings.
const UNKNOWN_COURSE: &str = "Unknown";

/// Store accessor over the scholarship database.
///
/// Holds one connection for the lifetime of the process; queries are
/// synchronous, which is acceptable because the store is local and small.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Store {
    /// Open an existing scholarship database.
    ///
    /// The schema is owned by the deployment: this never creates tables or
    /// migrates anything. The busy timeout bounds how long a query waits on
    /// a locked database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseMissing`] if the file does not exist, or a
    /// store fault if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::DatabaseMissing { path });
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;
        conn.busy_timeout(busy_timeout)?;
        // Per-connection; without it the requirements FK is inert
        conn.pragma_update(None, "foreign_keys", true)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Open the database file, creating it and its schema if absent.
    ///
    /// Backs the explicit `db init` bootstrap; never called implicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or database cannot be
    /// created, or if schema creation fails.
    pub fn create(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;
        conn.busy_timeout(busy_timeout)?;
        conn.pragma_update(None, "foreign_keys", true)?;

        let store = Self { path, conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory store with the schema applied, for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        conn.pragma_update(None, "foreign_keys", true)?;

        let store = Self {
            path: PathBuf::from(":memory:"),
            conn,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create all application tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails.
    pub fn initialize_schema(&self) -> Result<()> {
        for statement in schema::SCHEMA_STATEMENTS {
            self.conn.execute(statement, [])?;
        }
        info!("Schema initialized at {}", self.path.display());
        Ok(())
    }

    /// List all maintainers with read-time status normalization.
    ///
    /// The stored status value is never rewritten; normalization applies
    /// only to the returned rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_maintainers(&self) -> Result<Vec<Maintainer>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT student_id, name, username, email, status
            FROM Maintainer ORDER BY student_id
            ",
        )?;

        let maintainers = stmt
            .query_map([], Self::row_to_maintainer)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(maintainers)
    }

    /// List all applicants with read-time status bucketing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_applicants(&self) -> Result<Vec<Applicant>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT applicant_id, name, course, status
            FROM Applicants ORDER BY applicant_id
            ",
        )?;

        let applicants = stmt
            .query_map([], Self::row_to_applicant)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(applicants)
    }

    /// Delete a maintainer by id.
    ///
    /// Returns `true` if a row was deleted, `false` if the id was absent
    /// (a silent no-op, not an error). Commits immediately; callers obtain
    /// explicit user confirmation before invoking this.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete_maintainer(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM Maintainer WHERE student_id = ?1", [id])?;
        if affected > 0 {
            info!("Deleted maintainer {}", id);
        }
        Ok(affected > 0)
    }

    /// Delete an applicant by id.
    ///
    /// Same contract as [`Store::delete_maintainer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete_applicant(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM Applicants WHERE applicant_id = ?1", [id])?;
        if affected > 0 {
            info!("Deleted applicant {}", id);
        }
        Ok(affected > 0)
    }

    /// Count all maintainers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_maintainers(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Maintainer", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count all applicants.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_applicants(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Applicants", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count applicants whose stored status falls into a keyword bucket.
    ///
    /// Matching is case-insensitive against the bucket's fixed keyword set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_applicants_in(&self, bucket: StatusBucket) -> Result<i64> {
        let keywords = bucket.keywords();
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM Applicants WHERE LOWER(status) IN (?1, ?2, ?3)",
            params![keywords[0], keywords[1], keywords[2]],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Group a table's rows by course.
    ///
    /// NULL and empty course values are bucketed under `"Unknown"` rather
    /// than dropped. Row order follows the underlying grouping order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn group_by_course(&self, table: CourseTable) -> Result<Vec<CourseCount>> {
        // Table names come from a closed enum, never from input.
        let sql = format!(
            "SELECT course, COUNT(*) FROM {} GROUP BY course",
            table.table_name()
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let counts = stmt
            .query_map([], |row| {
                let course: Option<String> = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok(CourseCount {
                    course: match course {
                        Some(value) if !value.is_empty() => value,
                        _ => UNKNOWN_COURSE.to_string(),
                    },
                    count,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Fetch the document set attached to a maintainer.
    ///
    /// A missing requirements row is the valid "nothing uploaded" state and
    /// returns an all-absent set; only a store fault is an error. Never
    /// retries and never returns partial data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn attachments(&self, maintainer_id: &str) -> Result<AttachmentSet> {
        let row = self
            .conn
            .query_row(
                r"
                SELECT COR, TOR, Good_Moral
                FROM Maintainer_Requirements
                WHERE maintainer_id = ?1
                ",
                [maintainer_id],
                |row| {
                    Ok(AttachmentSet {
                        registration: row.get(0)?,
                        transcript: row.get(1)?,
                        good_moral: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(row.unwrap_or_else(AttachmentSet::empty))
    }

    /// Convert a database row to a Maintainer struct.
    fn row_to_maintainer(row: &rusqlite::Row) -> rusqlite::Result<Maintainer> {
        let raw_status: Option<String> = row.get(4)?;
        Ok(Maintainer {
            id: row.get(0)?,
            name: row.get(1)?,
            username: row.get(2)?,
            email: row.get(3)?,
            status: ClaimStatus::from_raw(raw_status.as_deref()),
        })
    }

    /// Convert a database row to an Applicant struct.
    fn row_to_applicant(row: &rusqlite::Row) -> rusqlite::Result<Applicant> {
        let status: Option<String> = row.get(3)?;
        let bucket = StatusBucket::classify(status.as_deref());
        Ok(Applicant {
            id: row.get(0)?,
            name: row.get(1)?,
            course: row.get(2)?,
            status,
            bucket,
        })
    }
}

#[cfg(test)]
impl Store {
    /// Execute raw SQL against the store, for seeding test fixtures.
    pub(crate) fn raw_execute(&self, sql: &str, params: impl rusqlite::Params) -> Result<usize> {
        Ok(self.conn.execute(sql, params)?)
    }
}
