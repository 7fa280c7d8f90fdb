//! nifi-bootstrap - deployment-time bootstrap helper for clustered NiFi
//!
//! This is the CLI entry point. A bare invocation behaves like the patch
//! command so the tool can run as a scheduler launch hook with no arguments.

use clap::{Parser, Subcommand};
use nifi_bootstrap::authorizers::{self, node_identities};
use nifi_bootstrap::config::{BootstrapConfig, Mode};
use nifi_bootstrap::error::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NiFi cluster bootstrap helper
#[derive(Parser)]
#[command(name = "nifi-bootstrap")]
#[command(version)]
#[command(about = "Seeds NiFi cluster node identities into authorizers.xml", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append node identity entries to the authorizers file in place
    Patch {
        /// Sandbox directory
        #[arg(long)]
        sandbox: Option<PathBuf>,
        /// Number of cluster nodes
        #[arg(long)]
        node_count: Option<u32>,
        /// DNS suffix for node hostnames
        #[arg(long)]
        framework_host: Option<String>,
        /// Authorizers file (overrides the sandbox-derived location)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print the patched authorizers document to stdout
    Render {
        /// Sandbox directory
        #[arg(long)]
        sandbox: Option<PathBuf>,
        /// Number of cluster nodes
        #[arg(long)]
        node_count: Option<u32>,
        /// Authorizers file (overrides the sandbox-derived location)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the resolved configuration
    Config {
        /// Resolve for the render flow instead of patch
        #[arg(long)]
        render: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // A bare invocation is the deployment contract: patch, env-driven.
    let command = cli.command.unwrap_or(Commands::Patch {
        sandbox: None,
        node_count: None,
        framework_host: None,
        file: None,
    });

    match command {
        Commands::Patch {
            sandbox,
            node_count,
            framework_host,
            file,
        } => {
            let mut config = BootstrapConfig::from_env(Mode::Patch)?;
            if let Some(dir) = sandbox {
                config.sandbox = dir;
            }
            if let Some(count) = node_count {
                config.node_count = count;
            }
            if let Some(host) = framework_host {
                config.framework_host = host;
            }

            let path = file.unwrap_or_else(|| config.authorizers_path());
            tracing::debug!("Patching {} for {} nodes", path.display(), config.node_count);

            let entries = node_identities(&config);
            authorizers::patch_file(&path, &entries)?;
            println!(
                "Patched {} with {} node identity entries",
                path.display(),
                entries.len()
            );
        }

        Commands::Render {
            sandbox,
            node_count,
            file,
        } => {
            let mut config = BootstrapConfig::from_env(Mode::Render)?;
            if let Some(dir) = sandbox {
                config.sandbox = dir;
            }
            if let Some(count) = node_count {
                config.node_count = count;
            }

            let path = file.unwrap_or_else(|| config.authorizers_path());
            let entries = node_identities(&config);
            let rendered = authorizers::render_file(&path, &entries)?;
            println!("{}", rendered);
        }

        Commands::Config { render } => {
            let mode = if render { Mode::Render } else { Mode::Patch };
            let config = BootstrapConfig::from_env(mode)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
