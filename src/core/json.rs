//! Purpose: JSON parsing with byte-offset and context-window diagnostics.
//! Exports: `parse`.
//! Role: Wraps the serde_json parser so binaries can report positions, not just lines.
//! Invariants: Reported offsets are byte positions into the decoded text, clamped to its length.
//! Invariants: Context windows cover at most 20 characters on either side of the failure.
use serde_json::Value;
use serde_json::error::Category;

use crate::core::error::{Error, ErrorKind};

const CONTEXT_CHARS: usize = 20;

pub fn parse(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|err| {
        let offset = if err.classify() == Category::Eof {
            text.len()
        } else {
            byte_offset(text, err.line(), err.column())
        };
        Error::new(ErrorKind::Parse)
            .with_message(err.to_string())
            .with_offset(offset as u64)
            .with_context(context_window(text, offset))
    })
}

// serde_json reports one-based line/column pairs; fold them back into a
// byte offset so callers can show an absolute position.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    if line == 0 || column == 0 {
        return 0;
    }
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column - 1).min(text.len())
}

fn context_window(text: &str, offset: usize) -> String {
    let char_index = text
        .char_indices()
        .take_while(|(byte, _)| *byte < offset)
        .count();
    let start = char_index.saturating_sub(CONTEXT_CHARS);
    text.chars()
        .skip(start)
        .take(char_index - start + CONTEXT_CHARS)
        .collect()
}
