use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use syncai::cli::{Cli, normalize_args};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let cli = match Cli::try_parse_from(normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) => {
            eprint!("{e}");
            eprint!("{}", engine::about::help());
            return Ok(ExitCode::from(2));
        }
    };

    syncai::run(cli).await
}
