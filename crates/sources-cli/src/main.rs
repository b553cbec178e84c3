//! configure-sources
//!
//! Reads a sources file and prints the launcher's view of it as one line of
//! JSON: `{"mcpServers":{...},"mcpPackages":[...],"webSources":"..."}`.
//!
//! # Usage
//!
//! ```bash
//! configure-sources [CONFIG] [--copilot-config <PATH>] [--github-env <PATH>]
//! ```
//!
//! # Environment Variables
//!
//! - `SOURCES_CONFIG`: sources file used when CONFIG is not given
//! - `RUST_LOG`: Control log verbosity (default: `warn`)
//!
//! # Output
//!
//! Stdout always carries exactly one JSON line and the exit status is always
//! success. A missing or unreadable sources file is reported on stderr and
//! replaced by the empty default, so callers can pipe the output straight
//! into a JSON parser.

mod cli;
mod logging;

use clap::Parser;
use clap::error::ErrorKind;
use sources_core::{Projection, export_web_sources, load_projection, write_copilot_config};
use std::io::Write;
use std::path::{Path, PathBuf};

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Bad arguments are a configuration problem, not a failure. The
            // first raw argument is still tried as the sources path, which
            // covers paths that start with `-`.
            let _ = e.print();
            let explicit = std::env::args_os().nth(1).map(PathBuf::from);
            emit(&resolve_projection(explicit.as_deref()));
            return;
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    if !cli.extra.is_empty() {
        tracing::debug!(count = cli.extra.len(), "Ignoring extra arguments");
    }

    let projection = resolve_projection(cli.config.as_deref());
    write_side_outputs(&cli, &projection);
    emit(&projection);
}

fn resolve_projection(explicit: Option<&Path>) -> Projection {
    let Some(path) = sources_core::resolve_input_from_env(explicit) else {
        tracing::debug!("No sources file given, using empty default");
        return Projection::default();
    };

    tracing::debug!(path = %path.display(), "Loading sources");
    match load_projection(&path) {
        Ok(projection) => projection,
        Err(e) => {
            eprintln!("Error parsing sources config: {e}");
            Projection::default()
        }
    }
}

fn write_side_outputs(cli: &Cli, projection: &Projection) {
    if let Some(path) = &cli.copilot_config
        && let Err(e) = write_copilot_config(path, projection)
    {
        eprintln!("Failed to write Copilot config: {e}");
    }

    if let Some(path) = &cli.github_env
        && let Err(e) = export_web_sources(path, projection)
    {
        eprintln!("Failed to export web sources: {e}");
    }
}

fn emit(projection: &Projection) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", projection.to_json_line()) {
        tracing::debug!(error = %e, "Failed to write projection to stdout");
    }
}
