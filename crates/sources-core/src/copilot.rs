//! Writing enabled MCP servers into a Copilot CLI config file.

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::projection::{McpServer, Projection};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CopilotConfig<'a> {
    mcp_servers: &'a IndexMap<String, McpServer>,
}

/// Render `{"mcpServers": ...}` with two-space indentation and a trailing newline.
pub fn render_copilot_config(projection: &Projection) -> Result<String> {
    let config = CopilotConfig {
        mcp_servers: &projection.mcp_servers,
    };
    let mut text = serde_json::to_string_pretty(&config)?;
    text.push('\n');
    Ok(text)
}

/// Replace the file at `path` with the rendered config, creating parent
/// directories as needed.
pub fn write_copilot_config(path: &Path, projection: &Projection) -> Result<()> {
    let text = render_copilot_config(projection)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), servers = projection.mcp_servers.len(), "Wrote Copilot config");
    Ok(())
}
