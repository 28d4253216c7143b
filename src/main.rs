mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    Cli, Command, diff::handle_diff_command, query::handle_query_command,
    validate::handle_validate_command,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose, cli.log_format);

    let result = match cli.cmd {
        Command::Diff(args) => handle_diff_command(args),
        Command::Validate(args) => handle_validate_command(args),
        Command::Get(args) => handle_query_command(args),
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
