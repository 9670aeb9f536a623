use clap::Parser;

mod cli;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};
use scorecard_core::errors::{ConfigError, InputError};

fn main() {
    let cli = Cli::parse();
    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            if let Some(input) = e.downcast_ref::<InputError>() {
                eprintln!("input error: {input}");
            } else if let Some(cfg) = e.downcast_ref::<ConfigError>() {
                eprintln!("config error: {cfg}");
            } else {
                eprintln!("fatal: {e:?}");
            }
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
