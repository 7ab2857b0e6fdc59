//! html2vecty: convert HTML markup into vecty Go components.

mod cli;
mod config;
mod error;
mod logging;
mod run;

use clap::Parser;
use cli::Args;
use config::Config;
use miette::Result;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::from_args(&args);
    run::run(&config)?;
    Ok(())
}
