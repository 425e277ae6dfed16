// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stevedore")]
#[command(about = "HTTP API for local container engine lifecycle management")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a stevedore.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Run the API server
    Serve {
        /// Address to listen on
        #[arg(long, env = "STEVEDORE_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "STEVEDORE_PORT")]
        port: Option<u16>,

        /// Container engine socket path
        #[arg(long, env = "STEVEDORE_ENGINE_SOCKET")]
        socket: Option<String>,

        /// Explicit configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
