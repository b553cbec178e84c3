//! Projection of source records into the launcher's view.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::SourceRecord;

/// Command used to launch every MCP server package
pub const LAUNCHER_COMMAND: &str = "npx";

/// Flag passed to the launcher so it installs without prompting
pub const AUTO_CONFIRM_FLAG: &str = "-y";

/// Sentence that introduces the documentation URLs in `webSources`
pub const WEB_SOURCES_PREFIX: &str = "Also consult these documentation sources: ";

/// Serialized form of [`Projection::default`]
pub const EMPTY_DEFAULT_JSON: &str = r#"{"mcpServers":{},"mcpPackages":[],"webSources":""}"#;

/// How to start one MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    pub command: String,
    pub args: Vec<String>,
}

impl McpServer {
    /// `npx -y <package>`
    pub fn for_package(package: &str) -> Self {
        Self {
            command: LAUNCHER_COMMAND.to_string(),
            args: vec![AUTO_CONFIRM_FLAG.to_string(), package.to_string()],
        }
    }
}

/// The three collections handed to the downstream launcher.
///
/// `Default` is the empty projection emitted whenever there is no usable
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Keyed by record name, in order of first appearance
    pub mcp_servers: IndexMap<String, McpServer>,
    pub mcp_packages: Vec<String>,
    pub web_sources: String,
}

impl Projection {
    /// Compact, single-line JSON for stdout.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize projection, using empty default");
            EMPTY_DEFAULT_JSON.to_string()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.mcp_servers.is_empty() && self.mcp_packages.is_empty() && self.web_sources.is_empty()
    }
}

/// Build the projection from records in source order.
///
/// A repeated server name replaces the earlier `mcpServers` entry in place,
/// keeping its original position, and every eligible record still appends
/// its package to `mcpPackages`.
pub fn project(records: &[SourceRecord]) -> Projection {
    let mut projection = Projection::default();
    let mut urls = Vec::new();

    for record in records {
        if let Some(package) = record.mcp_package() {
            projection
                .mcp_servers
                .insert(record.name.clone(), McpServer::for_package(package));
            projection.mcp_packages.push(package.to_string());
        }
        if let Some(url) = record.web_url() {
            urls.push(url);
        }
    }

    projection.web_sources = web_sources_sentence(&urls);

    tracing::debug!(
        servers = projection.mcp_servers.len(),
        packages = projection.mcp_packages.len(),
        urls = urls.len(),
        "Projected sources"
    );
    projection
}

/// The `webSources` text for `urls`: empty for no URLs.
pub fn web_sources_sentence(urls: &[&str]) -> String {
    if urls.is_empty() {
        return String::new();
    }
    format!("{WEB_SOURCES_PREFIX}{}", urls.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_empty_default() {
        assert_eq!(Projection::default().to_json_line(), EMPTY_DEFAULT_JSON);
        assert!(Projection::default().is_empty());
    }

    #[test]
    fn test_mcp_server_for_package() {
        let server = McpServer::for_package("@scope/name");
        assert_eq!(server.command, "npx");
        assert_eq!(server.args, vec!["-y", "@scope/name"]);
    }
}
