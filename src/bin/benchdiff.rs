use std::{env, ffi::OsString, process};

use benchdiff::cli::{CommandLineConfig, ParsedArgs, execute};
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::usage());
        return;
    }
    let config = match CommandLineConfig::from_args(args) {
        Ok(ParsedArgs::Run(cfg)) => cfg,
        Ok(ParsedArgs::Usage) => {
            println!("{}", CommandLineConfig::usage());
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match execute(&config) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
