use std::process::ExitCode;

use clap::Parser;
use filter_log::{app, cli::Args, logging, presentation};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version go to stdout and succeed
            let code = if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
            let _ = e.print();
            return code;
        }
    };
    logging::init(args.verbose);

    match app::run(&args, std::io::stdout()) {
        Ok(summary) => {
            log::debug!("done: {summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            presentation::exit_code(&e)
        }
    }
}
