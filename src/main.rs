use sqlmermaid::convert;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("Failed to read stdin: {0}")]
    ReadStdin(io::Error),
    #[error("Failed to write {path}: {source}")]
    WriteOutput { path: String, source: io::Error },
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<String> = None;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                if input_path.is_some() {
                    eprintln!("Unexpected argument: {}", arg);
                    process::exit(1);
                }
                input_path = Some(arg.to_string());
            }
        }
        i += 1;
    }

    if let Err(e) = run(input_path.as_deref(), output_path.as_deref()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(input_path: Option<&str>, output_path: Option<&str>) -> Result<(), CliError> {
    let sql = match input_path {
        Some(path) if path != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_string(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::ReadStdin)?;
            buf
        }
    };

    let diagram = convert(&sql);

    match output_path {
        Some(path) => fs::write(path, &diagram).map_err(|source| CliError::WriteOutput {
            path: path.to_string(),
            source,
        })?,
        None => print!("{}", diagram),
    }

    Ok(())
}

fn print_usage(prog: &str) {
    eprintln!("Usage: {} [input.sql] [options]", prog);
    eprintln!();
    eprintln!("Converts SQL CREATE TABLE statements to a Mermaid erDiagram.");
    eprintln!("Reads stdin when no input file is given (or when it is '-').");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>   Output file (default: stdout)");
}
