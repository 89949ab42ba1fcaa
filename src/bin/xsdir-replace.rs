//! Command-line interface for xsdir-replace
//! Converts an MCNP xsdir file into `xsdir_serpent` in the working directory.
//!
//! Usage:
//!   xsdir-replace `<input_file>`
//!
//! Exactly one argument is taken as the input path, whatever it looks like,
//! unless it is one of clap's help or version flags.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, Command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use xsdir_replace::XsdirError;

const USAGE: &str = "Usage: xsdir-replace input_file";

const BUILTIN_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

fn cli() -> Command {
    Command::new("xsdir-replace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrites an MCNP xsdir file for Serpent, saving it as xsdir_serpent")
        .arg(
            Arg::new("input_file")
                .help("Path to the MCNP xsdir file")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
}

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    match args.as_slice() {
        [_, input] if !is_builtin_flag(input) => handle_process_command(Path::new(input)),
        _ => handle_usage(&args),
    }
}

fn is_builtin_flag(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|arg| BUILTIN_FLAGS.contains(&arg))
}

/// Help and version requests are answered by clap; everything else reaching
/// here has the wrong argument count.
fn handle_usage(args: &[OsString]) {
    if let Err(e) = cli().try_get_matches_from(args) {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
    }
    println!("{}", USAGE);
    std::process::exit(1);
}

/// Handle the conversion of a single file
fn handle_process_command(input: &Path) {
    match xsdir_replace::process(input) {
        Ok(report) => {
            println!("Processed file saved as: {}", report.output_path.display());
        }
        Err(e @ XsdirError::NotFound(_)) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
