//! Purpose: `jsonvet` CLI entry point checking one UTF-16 JSON file for validity.
//! Role: Binary crate root; parses args, checks the file, reports on stdout.
//! Invariants: Verdicts and diagnostics go to stdout; exit code is 0 only for valid files.
//! Invariants: Decode and parse failures share one verdict line so callers need no distinction.
use std::path::{Path, PathBuf};

use clap::{Parser, error::ErrorKind as ClapErrorKind};

use jsonvet::core::error::{Error, ErrorKind};
use jsonvet::core::{json, source, utf16};

#[derive(Parser)]
#[command(
    name = "jsonvet",
    version,
    about = "Check that a file contains valid UTF-16 encoded JSON"
)]
struct Cli {
    /// Path to the JSON file to check.
    #[arg(value_name = "json_file")]
    file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                let _ = err.print();
                std::process::exit(0);
            }
            _ => {
                println!("Usage: {} <json_file>", program_name());
                std::process::exit(1);
            }
        },
    };

    if let Err(err) = check_file(&cli.file) {
        println!("{}", render_failure(&err));
        std::process::exit(1);
    }
    println!("Valid JSON file");
}

fn check_file(path: &Path) -> Result<(), Error> {
    let bytes = source::read_bytes(path)?;
    let text = utf16::decode(&bytes).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message(err.to_string())
            .with_path(path)
            .with_source(err)
    })?;
    json::parse(&text)?;
    Ok(())
}

fn render_failure(err: &Error) -> String {
    match err.kind() {
        ErrorKind::Decode | ErrorKind::Parse => {
            format!("Invalid JSON file: {}", detail(err))
        }
        ErrorKind::NotFound => match err.path() {
            Some(path) => format!("File not found: {}", path.display()),
            None => format!("File not found: {}", detail(err)),
        },
        ErrorKind::Usage | ErrorKind::Empty | ErrorKind::Schema | ErrorKind::Unexpected => {
            format!("Error: {}", detail(err))
        }
    }
}

fn detail(err: &Error) -> String {
    match err.message() {
        Some(message) => message.to_string(),
        None => err.to_string(),
    }
}

fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "jsonvet".to_string())
}

#[cfg(test)]
mod tests {
    use super::{detail, render_failure};
    use jsonvet::core::error::{Error, ErrorKind};

    #[test]
    fn parse_failures_render_as_invalid_json() {
        let err = Error::new(ErrorKind::Parse).with_message("expected value at line 1 column 6");
        let rendered = render_failure(&err);
        assert!(rendered.starts_with("Invalid JSON file: "));
        assert!(rendered.contains("expected value"));
    }

    #[test]
    fn decode_failures_share_the_invalid_json_verdict() {
        let err = Error::new(ErrorKind::Decode).with_message("unpaired surrogate in UTF-16 data");
        assert!(render_failure(&err).starts_with("Invalid JSON file: "));
    }

    #[test]
    fn missing_files_render_with_the_path() {
        let err = Error::new(ErrorKind::NotFound).with_path("data/in.json");
        assert_eq!(render_failure(&err), "File not found: data/in.json");
    }

    #[test]
    fn other_failures_render_generically() {
        let err = Error::new(ErrorKind::Unexpected).with_message("read interrupted");
        assert_eq!(render_failure(&err), "Error: read interrupted");
    }

    #[test]
    fn detail_falls_back_to_display_without_a_message() {
        let err = Error::new(ErrorKind::Unexpected);
        assert_eq!(detail(&err), "Unexpected");
    }
}
