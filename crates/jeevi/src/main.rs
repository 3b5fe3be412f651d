// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Peru Leni Jeevi - a routing and code-refining Discord assistant.
//!
//! This is the binary entry point for the Jeevi agent.

mod serve;

use clap::{Parser, Subcommand};

/// Peru Leni Jeevi - a routing and code-refining Discord assistant.
#[derive(Parser, Debug)]
#[command(name = "jeevi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Jeevi agent server.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match jeevi_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            jeevi_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("jeevi: use --help for available commands");
        }
    }
}
