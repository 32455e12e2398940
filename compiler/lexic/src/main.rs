//! `lexic`: print the token stream of a lexi source file.

use std::io;
use std::process::ExitCode;

use lexic::logging::init_tracing;
use lexic::{parse_args, run, usage};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{}", usage());
        return ExitCode::SUCCESS;
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
