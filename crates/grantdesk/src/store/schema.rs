//! `SQLite` schema definitions for grantdesk.
//!
//! The schema is owned by the deployment: `Store::open` never creates or
//! migrates tables. These statements back the explicit `db init` bootstrap
//! and the in-memory test fixtures, and they match the fixed table and
//! column names the store queries against.

/// SQL statement to create the maintainer table.
pub const CREATE_MAINTAINER_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS Maintainer (
    student_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    course TEXT,
    status TEXT
)
";

/// SQL statement to create the applicants table.
pub const CREATE_APPLICANTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS Applicants (
    applicant_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    course TEXT,
    status TEXT
)
";

/// SQL statement to create the requirements table holding document BLOBs.
pub const CREATE_REQUIREMENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS Maintainer_Requirements (
    maintainer_id TEXT PRIMARY KEY
        REFERENCES Maintainer(student_id) ON DELETE CASCADE,
    COR BLOB,
    TOR BLOB,
    Good_Moral BLOB
)
";

/// SQL statement to create an index on applicant status for bucket counts.
pub const CREATE_APPLICANT_STATUS_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_applicants_status ON Applicants(status)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_MAINTAINER_TABLE,
    CREATE_APPLICANTS_TABLE,
    CREATE_REQUIREMENTS_TABLE,
    CREATE_APPLICANT_STATUS_INDEX,
];
