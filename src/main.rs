mod arith_cmd;
mod cli;
mod config;
mod convert_cmd;
mod highlights_cmd;
mod logging;
mod parse;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let format = match &cli.format {
        Some(flag) => parse::parse_format(flag)?,
        None => parse::parse_format(&config.output.format)?,
    };

    match cli.command {
        Command::Convert(args) => convert_cmd::run(&args, &config, format),
        Command::Today(args) => arith_cmd::today(&args, format),
        Command::Add(args) => arith_cmd::add(&args, &config, format),
        Command::Progress(args) => arith_cmd::progress(&args, &config, format),
        Command::Highlights(args) => highlights_cmd::run(&args, &config, format),
    }
}
