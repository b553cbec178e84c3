//! Source list parsing for agent launchers
//!
//! Reads a line-oriented list of source declarations and projects it into
//! what a launcher needs:
//!
//! - **mcpServers**: the MCP servers to start, keyed by name
//! - **mcpPackages**: the packages those servers install, in source order
//! - **webSources**: a sentence listing documentation URLs for the prompt
//!
//! # Example
//!
//! ```
//! use sources_core::{assemble, project};
//!
//! let text = "- name: docs\n  type: web\n  url: https://docs.example.com\n  enabled: true\n";
//! let projection = project(&assemble(text));
//!
//! assert_eq!(
//!     projection.web_sources,
//!     "Also consult these documentation sources: https://docs.example.com"
//! );
//! ```

pub mod assembler;
pub mod copilot;
pub mod error;
pub mod github_env;
pub mod input;
pub mod projection;
pub mod record;

use std::path::Path;

pub use assembler::assemble;
pub use copilot::{render_copilot_config, write_copilot_config};
pub use error::{Error, Result};
pub use github_env::{WEB_SOURCES_VAR, export_web_sources, format_env_entry};
pub use input::{SOURCES_CONFIG_ENV, read_source_file, resolve_input, resolve_input_from_env};
pub use projection::{
    AUTO_CONFIRM_FLAG, EMPTY_DEFAULT_JSON, LAUNCHER_COMMAND, McpServer, Projection,
    WEB_SOURCES_PREFIX, project, web_sources_sentence,
};
pub use record::{SourceRecord, SourceType};

/// Read, scan and project the sources file at `path`.
pub fn load_projection(path: &Path) -> Result<Projection> {
    let text = read_source_file(path)?;
    let records = assemble(&text);
    Ok(project(&records))
}
