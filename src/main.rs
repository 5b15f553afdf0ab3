mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::audit::*;
pub use services::evaluate::*;
pub use services::output::*;
pub use services::probe::*;
pub use services::registry::*;
pub use services::report::*;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle_verify(&cli)
}
