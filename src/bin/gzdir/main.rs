use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process::exit;
use log::LevelFilter;
use env_logger::Builder;
use core::str::FromStr;

use gzdir::errors::Result;
use gzdir::CompressOptions;

/// Main for gzdir binary - call `run()` and print any error that results or exit silently if OK
pub fn main() {
    let matches = get_matches();
    let default = String::from("error");
    let verbosity = matches.get_one::<String>("verbosity").unwrap_or(&default);
    let level = LevelFilter::from_str(verbosity).unwrap_or(LevelFilter::Error);
    let mut builder = Builder::from_default_env();
    builder.filter_level(level).init();

    match run(&matches) {
        Err(ref e) => {
            eprintln!("Error: {e}");
            for e in e.iter().skip(1) {
                eprintln!("caused by: {e}");
            }

            // The backtrace is generated if env var `RUST_BACKTRACE` is set to `1` or `full`
            if let Some(backtrace) = e.backtrace() {
                eprintln!("backtrace: {backtrace:?}");
            }

            exit(1);
        }
        Ok(_) => exit(0),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    // clap rejects the invocation before we get here if the directory is missing
    let directory = matches.get_one::<PathBuf>("directory")
        .ok_or("No directory specified")?;

    let options = CompressOptions {
        verify: matches.get_flag("verify"),
        quiet: matches.get_flag("quiet"),
    };

    let report = gzdir::compress_directory(directory, &options)?;
    log::info!("Compressed {} files, skipped {}", report.compressed.len(), report.skipped.len());

    Ok(())
}

// Parse the command line arguments using clap
fn get_matches() -> ArgMatches {
    let app = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::new("verbosity")
            .short('v')
            .long("verbosity")
            .num_args(1)
            .value_name("VERBOSITY_LEVEL")
            .help("Set verbosity level for output (trace, debug, info, warn, default: error)"))
        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help("Decompress each output and check it matches its source"))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Do not print a line for each file compressed"))
        .arg(Arg::new("directory")
            .required(true)
            .num_args(1)
            .value_parser(clap::value_parser!(PathBuf))
            .value_name("DIRECTORY")
            .help("the directory whose files are to be gzipped"));

    app.get_matches()
}
