//! Safe attachment opening.
//!
//! This module materializes a document payload to a uniquely named
//! temporary file and hands it to the platform's default opener. The
//! write-and-launch sequence runs on a blocking worker so the interaction
//! path never freezes, and the whole pipeline is bounded by a timeout so a
//! hung launcher resolves instead of waiting forever.
//!
//! Temp names carry a per-invocation random token, so concurrent opens of
//! same-labeled documents from different records can never collide.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sniff::{self, FileKind};

// Platform-specific launchers using conditional compilation
#[cfg(target_os = "linux")]
use grantdesk_linux as platform;

#[cfg(target_os = "macos")]
use grantdesk_mac as platform;

#[cfg(target_os = "windows")]
use grantdesk_windows as platform;

/// Options for the open pipeline.
#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Bound on the materialize-and-launch sequence.
    pub timeout: Duration,
    /// Directory for materialized files; process temp dir when `None`.
    pub temp_dir: Option<PathBuf>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            temp_dir: None,
        }
    }
}

/// Name of the platform whose launcher this build dispatches to.
#[must_use]
pub fn platform_name() -> &'static str {
    platform::platform_name()
}

/// Write a payload to a uniquely named temporary file.
///
/// The extension comes from sniffing the payload's leading bytes. The file
/// is created with a random token between the label prefix and the
/// extension, written in one scoped pass, and persisted; on a write fault
/// the partially written file is removed on drop.
///
/// # Errors
///
/// Returns [`Error::TempWrite`] if the file cannot be created, written,
/// or persisted.
pub fn materialize(
    label: &str,
    buffer: &[u8],
    temp_dir: Option<&Path>,
) -> Result<(PathBuf, FileKind)> {
    let kind = sniff::classify(buffer);
    let dir = temp_dir.map_or_else(std::env::temp_dir, Path::to_path_buf);

    let mut file = tempfile::Builder::new()
        .prefix(&format!("{label}-"))
        .suffix(&format!(".{}", kind.extension()))
        .tempfile_in(&dir)
        .map_err(|source| Error::TempWrite {
            path: dir.clone(),
            source,
        })?;

    file.write_all(buffer).map_err(|source| Error::TempWrite {
        path: file.path().to_path_buf(),
        source,
    })?;

    let (_, path) = file.keep().map_err(|persist| Error::TempWrite {
        path: persist.file.path().to_path_buf(),
        source: persist.error,
    })?;

    debug!(
        "Materialized {} byte {} payload to {}",
        buffer.len(),
        kind,
        path.display()
    );
    Ok((path, kind))
}

/// Materialize a payload and hand it to the platform's default opener.
///
/// Runs off the interaction path on a blocking worker. Callers invoke this
/// only for present payloads, show an "opening" indicator beforehand, and
/// clear it unconditionally when the returned future resolves — success or
/// failure. A launch fault is reported as a typed error for the shell to
/// render as a dismissible notification; it never unlinks the materialized
/// file.
///
/// # Errors
///
/// Returns [`Error::TempWrite`] if materialization fails,
/// [`Error::Launch`] if the platform launcher fails, or
/// [`Error::LaunchTimeout`] if the pipeline exceeds the configured bound.
pub async fn open_attachment(
    label: &str,
    buffer: Vec<u8>,
    options: &OpenOptions,
) -> Result<PathBuf> {
    let worker_label = label.to_string();
    let temp_dir = options.temp_dir.clone();

    let worker = tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        let (path, _) = materialize(&worker_label, &buffer, temp_dir.as_deref())?;
        platform::open_path(&path).map_err(|e| Error::launch(path.clone(), e.to_string()))?;
        Ok(path)
    });

    match tokio::time::timeout(options.timeout, worker).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(Error::internal(format!(
            "open worker failed: {join_error}"
        ))),
        Err(_) => {
            warn!(
                "Opening '{}' exceeded the {}s bound",
                label,
                options.timeout.as_secs()
            );
            Err(Error::LaunchTimeout {
                label: label.to_string(),
                seconds: options.timeout.as_secs(),
            })
        }
    }
}
