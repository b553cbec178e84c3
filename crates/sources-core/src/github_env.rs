//! Exporting the web sources sentence to a GitHub Actions env file.
//!
//! Entries are appended in the `$GITHUB_ENV` format: `NAME=value` for
//! single-line values and a `NAME<<EOF` block for multi-line ones.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::projection::Projection;

/// Variable that carries `webSources` to later workflow steps
pub const WEB_SOURCES_VAR: &str = "EXTRA_WEB_SOURCES";

const DELIMITER: &str = "EOF";

/// Format one env-file entry.
pub fn format_env_entry(name: &str, value: &str) -> String {
    if value.contains('\n') {
        format!("{name}<<{DELIMITER}\n{value}\n{DELIMITER}\n")
    } else {
        format!("{name}={value}\n")
    }
}

/// Append [`WEB_SOURCES_VAR`] to the env file at `path`.
///
/// Returns `Ok(false)` without touching the file when there are no web
/// sources to export.
pub fn export_web_sources(path: &Path, projection: &Projection) -> Result<bool> {
    if projection.web_sources.is_empty() {
        return Ok(false);
    }

    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(format_env_entry(WEB_SOURCES_VAR, &projection.web_sources).as_bytes())
        .map_err(write_err)?;

    tracing::debug!(path = %path.display(), var = WEB_SOURCES_VAR, "Exported web sources");
    Ok(true)
}
