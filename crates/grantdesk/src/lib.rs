//! `grantdesk` - administrative console for a university scholarship program
//!
//! This library provides the core functionality for listing, viewing, and
//! deleting maintainer and applicant records against a local scholarship
//! database, and for safely opening the binary requirement documents
//! attached to maintainers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod opener;
pub mod records;
pub mod sniff;
pub mod store;

pub use config::Config;
pub use dashboard::DashboardSummary;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use records::{Applicant, AttachmentSet, ClaimStatus, DocumentKind, Maintainer, StatusBucket};
pub use sniff::{classify, FileKind};
pub use store::{CourseCount, CourseTable, Store};
