mod cli;
mod create;

use clap::Parser;
use cli::{Cli, Commands};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Create(cmd) => create::create(cmd, &cli)?,
    };
    Ok(())
}
