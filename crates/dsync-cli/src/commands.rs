use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::handlers;
use crate::handlers::sync::Direction;

/// Dispatch a parsed invocation. The returned code is the process exit
/// status: 0 success, 1 operational failure, 2 usage error or stub.
/// Errors bubbling out are printed by main and exit 1.
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init { force } => handlers::init::handle(force),

        Commands::Doctor {
            endpoint,
            link,
            json,
        } => handlers::doctor::handle(endpoint.as_deref(), link.as_deref(), json),

        Commands::Ls => handlers::stubs::not_implemented("ls"),

        Commands::Pull(args) => handlers::sync::handle(Direction::Pull, &args),
        Commands::Push(args) => handlers::sync::handle(Direction::Push, &args),

        Commands::Clean => handlers::stubs::not_implemented("clean"),
    }
}
