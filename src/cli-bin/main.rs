pub mod prelude {
    pub use super::args::prelude::*;
}

pub mod args;
pub mod commands;

use args::{Args, Command};

fn main() {
    env_logger::init();

    let args = match <Args as clap::Parser>::try_parse() {
        Ok(args) => args,
        Err(err) => {
            use clap::error::ErrorKind::*;

            let exit_code = match err.kind() {
                DisplayHelp | DisplayHelpOnMissingArgumentOrSubcommand | DisplayVersion => 0,
                _ => 2,
            };

            err.print().unwrap();
            std::process::exit(exit_code);
        }
    };

    let quiet = args.quiet;
    match run(args.command, quiet) {
        Ok(success) => {
            if quiet {
                std::process::exit(if success { 0 } else { 1 });
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

fn run(command: Command, quiet: bool) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Command::TestAdmission { taskset, candidate, config_file } =>
            commands::test_admission(&taskset, &candidate, config_file.as_deref(), quiet),
        Command::Simulate(simulate_args) =>
            commands::simulate(&simulate_args, quiet),
    }
}
