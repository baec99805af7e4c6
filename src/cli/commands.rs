use crate::dispatcher::{DispatchError, Dispatcher, RequestSource};
use crate::echo::EchoLoader;
use crate::namespace::DirNamespace;
use crate::resolver::resolve;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for routewalk
///
/// Resolves and dispatches slash-delimited routes against a handler
/// namespace backed by a directory tree.
#[derive(Parser)]
#[command(name = "routewalk")]
#[command(about = "Convention-driven route resolution and dispatch", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a route and print handler, action and arguments
    Resolve {
        /// Root directory of the handler namespace
        #[arg(short, long)]
        root: PathBuf,

        /// Handler file name prefix (e.g. "handler_")
        #[arg(long, default_value = "")]
        prefix: String,

        /// Handler file name suffix (e.g. ".toml")
        #[arg(long, default_value = "")]
        suffix: String,

        /// The slash-delimited route to resolve
        route: String,
    },
    /// Dispatch a route, loading every located unit as an echo handler
    Dispatch {
        /// Root directory of the handler namespace
        #[arg(short, long)]
        root: PathBuf,

        /// Handler file name prefix (e.g. "handler_")
        #[arg(long, default_value = "")]
        prefix: String,

        /// Handler file name suffix (e.g. ".toml")
        #[arg(long, default_value = "")]
        suffix: String,

        /// The slash-delimited route to dispatch
        route: String,
    },
}

struct CliRequest {
    route: String,
}

impl RequestSource for CliRequest {
    fn route(&self) -> String {
        self.route.clone()
    }
}

/// Execute the parsed CLI command.
///
/// # Errors
///
/// Propagates dispatch failures. A `NotFound` outcome is reported to the
/// user as a short generic message before the error is returned, so the
/// caller can exit non-zero without printing internals.
pub fn run_cli(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Resolve {
            root,
            prefix,
            suffix,
            route,
        } => {
            let ns = DirNamespace::new(root).with_naming(prefix.clone(), suffix.clone());
            let res = resolve(route, &ns);
            println!(
                "handler: {} | action: {} | args: {:?}",
                res.location.qualified_name(),
                res.action_name,
                res.args
            );
            Ok(())
        }
        Commands::Dispatch {
            root,
            prefix,
            suffix,
            route,
        } => {
            let ns = DirNamespace::new(root).with_naming(prefix.clone(), suffix.clone());
            let loader = EchoLoader::new(ns.clone());
            let dispatcher = Dispatcher::new(Box::new(loader));
            let request = CliRequest {
                route: route.clone(),
            };
            match dispatcher.dispatch(&request, &ns) {
                Ok(()) => Ok(()),
                Err(DispatchError::NotFound) => {
                    eprintln!("404: no handler for route '{route}'");
                    Err(Box::new(DispatchError::NotFound))
                }
                Err(err) => {
                    eprintln!("request failed");
                    Err(Box::new(err))
                }
            }
        }
    }
}
