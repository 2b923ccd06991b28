//! Purpose: Staged validation of an add/update request payload before restore.
//! Exports: None (binary entry point).
//! Role: Walks one file through existence, content, decode, parse, and schema stages.
//! Invariants: Stages run in order; the first failure ends the process with exit 1.
//! Invariants: Only schema-stage outcomes reach the log file.
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, error::ErrorKind as ClapErrorKind};
use tracing_subscriber::EnvFilter;

use jsonvet::core::error::{Error, ErrorKind};
use jsonvet::core::model::{self, AddUpdateRequest};
use jsonvet::core::{json, source, utf16};

const LOG_FILE: &str = "data_restore.log";
const PREVIEW_BYTES: usize = 10;
const CONTENT_PREFIX_CHARS: usize = 50;

#[derive(Parser)]
#[command(
    name = "jsonvet-restore",
    version,
    about = "Validate an add/update request JSON file before restoring it"
)]
struct Cli {
    /// Path to the JSON file to validate.
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

    init_logging();

    if let Err(err) = run(&cli.file) {
        render_failure(&err);
        std::process::exit(1);
    }
}

/// Route log lines to `data_restore.log` in the working directory. The log
/// stays quiet except for the schema-stage outcome.
fn init_logging() {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) else {
        return;
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn run(path: &Path) -> Result<(), Error> {
    source::require_file(path)?;
    source::require_nonempty(path)?;

    let first_bytes = source::preview(path, PREVIEW_BYTES);
    println!("First bytes (hex): {}", source::hex_string(&first_bytes));

    let bytes = source::read_bytes(path)?;
    let text = utf16::decode(&bytes).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message(err.to_string())
            .with_path(path)
            .with_source(err)
    })?;
    println!("File content starts with: {}...", content_prefix(&text));

    let value = json::parse(&text)?;
    println!("JSON parsed successfully!");

    let request = model::validate(&value).map_err(|err| {
        let message = err.to_string();
        Error::new(ErrorKind::Schema)
            .with_message(message)
            .with_path(path)
            .with_source(err)
    })?;

    tracing::info!("Data loaded successfully");
    println!("Data loaded into AddUpdateRequest model successfully!");
    println!("{}", render_request(&request));
    Ok(())
}

fn render_failure(err: &Error) {
    match err.kind() {
        ErrorKind::Usage => {
            println!("Usage: {} <json_file>", program_name());
        }
        ErrorKind::NotFound => {
            println!("Error: File '{}' does not exist", path_label(err));
        }
        ErrorKind::Empty => {
            println!("Error: File '{}' is empty", path_label(err));
        }
        ErrorKind::Decode | ErrorKind::Unexpected => {
            println!("File reading error: {}", detail(err));
        }
        ErrorKind::Parse => {
            println!("JSON parsing error: {}", detail(err));
            let position = err.offset().unwrap_or(0);
            let near = err.context().unwrap_or("");
            println!("Error at position {position}, near: '{near}'");
        }
        ErrorKind::Schema => {
            let line = format!(
                "Error validating data against AddUpdateRequest model: {}",
                detail(err)
            );
            tracing::error!("{line}");
            println!("{line}");
        }
    }
}

fn render_request(request: &AddUpdateRequest) -> String {
    serde_json::to_string_pretty(request).unwrap_or_else(|_| format!("{request:?}"))
}

fn content_prefix(text: &str) -> String {
    text.chars().take(CONTENT_PREFIX_CHARS).collect()
}

fn detail(err: &Error) -> String {
    match err.message() {
        Some(message) => message.to_string(),
        None => err.to_string(),
    }
}

fn path_label(err: &Error) -> String {
    err.path()
        .map(|path| path.display().to_string())
        .unwrap_or_default()
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "jsonvet-restore".to_string())
}

#[cfg(test)]
mod tests {
    use super::content_prefix;

    #[test]
    fn content_prefix_takes_at_most_fifty_chars() {
        let text = "x".repeat(80);
        assert_eq!(content_prefix(&text).len(), 50);
        assert_eq!(content_prefix("short"), "short");
    }

    #[test]
    fn content_prefix_counts_chars_not_bytes() {
        let text = "é".repeat(60);
        assert_eq!(content_prefix(&text).chars().count(), 50);
    }
}
