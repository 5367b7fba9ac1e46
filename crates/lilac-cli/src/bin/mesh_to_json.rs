//! `mesh-to-json <input>` — load a Lilac mesh and print its JSON
//! transcription to standard output (spec.md §6.5).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lilac_cli::{diag, json, load_mesh_file, CliError};

const PROGRAM: &str = "mesh-to-json";

#[derive(Parser)]
#[command(name = "mesh-to-json", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Path to the Lilac mesh file to load.
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprintln!("{}", diag::plain(PROGRAM, "Wrong number of arguments"));
            return ExitCode::FAILURE;
        }
    };

    match run(&args.input) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diag::for_cli_error(PROGRAM, &err));
            ExitCode::FAILURE
        }
    }
}

fn run(input: &std::path::Path) -> Result<String, CliError> {
    let mesh = load_mesh_file(input)?;
    Ok(json::mesh_to_json(&mesh))
}
