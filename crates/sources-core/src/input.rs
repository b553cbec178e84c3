//! Locating and reading the sources file.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable consulted when no path argument is given
pub const SOURCES_CONFIG_ENV: &str = "SOURCES_CONFIG";

/// Pick the sources file path.
///
/// The explicit path wins over the fallback. Empty values count as absent,
/// and `None` means no input was supplied at all.
pub fn resolve_input(explicit: Option<&Path>, fallback: Option<&OsStr>) -> Option<PathBuf> {
    explicit
        .map(Path::as_os_str)
        .filter(|p| !p.is_empty())
        .or_else(|| fallback.filter(|p| !p.is_empty()))
        .map(PathBuf::from)
}

/// [`resolve_input`] with the fallback read from [`SOURCES_CONFIG_ENV`].
pub fn resolve_input_from_env(explicit: Option<&Path>) -> Option<PathBuf> {
    let fallback = std::env::var_os(SOURCES_CONFIG_ENV);
    resolve_input(explicit, fallback.as_deref())
}

/// Read the sources file as UTF-8 text.
pub fn read_source_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
