//! Windows-specific file launcher for grantdesk
//!
//! This crate hands materialized attachment files to the default
//! application via the shell's `start` builtin.

#![cfg(target_os = "windows")]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::Path;
use std::process::Command;

/// Get platform name
#[must_use]
pub fn platform_name() -> &'static str {
    "Windows"
}

/// Open a file with the default application via `cmd /C start`.
///
/// The empty quoted argument after `start` is the window title; without it
/// `start` would treat the file path as the title.
///
/// # Errors
///
/// Returns an error if `cmd` cannot be spawned or exits with a non-zero
/// status (no file association, permission denied).
pub fn open_path(path: &Path) -> io::Result<()> {
    let status = Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("start exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name() {
        assert_eq!(platform_name(), "Windows");
    }
}
