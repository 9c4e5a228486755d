//! Linux-specific file launcher for grantdesk
//!
//! This crate hands materialized attachment files to the desktop's default
//! application via `xdg-open`.

#![cfg(target_os = "linux")]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::Path;
use std::process::Command;

/// Get platform name
#[must_use]
pub fn platform_name() -> &'static str {
    "Linux"
}

/// Open a file with the desktop's default application.
///
/// Blocks until the launcher process exits. Callers that must not block
/// should run this on a worker thread.
///
/// # Errors
///
/// Returns an error if `xdg-open` cannot be spawned or exits with a
/// non-zero status (no default application, permission denied).
pub fn open_path(path: &Path) -> io::Result<()> {
    let status = Command::new("xdg-open").arg(path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("xdg-open exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name() {
        assert_eq!(platform_name(), "Linux");
    }
}
