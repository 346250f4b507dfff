use std::io;
use std::process::ExitCode;

use clap::Parser;

use correcthorse::{logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init();

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("correcthorse: error: {err}");
            ExitCode::FAILURE
        }
    }
}
