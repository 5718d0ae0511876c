use std::io::stdout;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use hbrender_cli::cli_args::Args;
use hbrender_cli::{execute, fatal_message, write_output};
use hbrender_core::error::{ErrorKind, Result};

fn run(args: &Args) -> Result<()> {
    let rendered = execute(args)?;
    write_output(&mut stdout().lock(), &rendered)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.kind() == ErrorKind::Configuration {
                eprintln!("{}", Args::command().render_usage());
            }
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}
