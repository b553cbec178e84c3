//! CLI argument parsing using clap derive

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Print the enabled MCP servers, their packages and documentation sources
/// from a sources file as a single JSON line.
///
/// Without a CONFIG argument the path is taken from $SOURCES_CONFIG. When
/// neither is set, or the file cannot be read, the empty default is printed.
#[derive(Parser, Debug)]
#[command(name = "configure-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sources file to read
    pub config: Option<PathBuf>,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Also write {"mcpServers": ...} to this Copilot config file
    #[arg(long, value_name = "PATH")]
    pub copilot_config: Option<PathBuf>,

    /// Append EXTRA_WEB_SOURCES to this GitHub Actions env file
    #[arg(long, value_name = "PATH")]
    pub github_env: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
