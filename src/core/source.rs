//! Purpose: File gatekeeping and raw-byte inspection ahead of decoding.
//! Exports: `require_file`, `require_nonempty`, `read_bytes`, `preview`, `hex_string`.
//! Role: Owns direct filesystem access so the binaries stay at message level.
//! Invariants: Missing paths surface as `ErrorKind::NotFound` with the path attached.
//! Invariants: `preview` never fails; callers get whatever prefix was readable.
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::core::error::{Error, ErrorKind};

/// Fails with `NotFound` unless `path` names an existing regular file.
pub fn require_file(path: &Path) -> Result<(), Error> {
    if path.is_file() {
        return Ok(());
    }
    Err(Error::new(ErrorKind::NotFound)
        .with_message("file does not exist")
        .with_path(path))
}

/// Fails with `Empty` when the file has zero length; returns the length otherwise.
pub fn require_nonempty(path: &Path) -> Result<u64, Error> {
    let metadata = fs::metadata(path).map_err(|err| map_io_error(err, path))?;
    if metadata.len() == 0 {
        return Err(Error::new(ErrorKind::Empty)
            .with_message("file is empty")
            .with_path(path));
    }
    Ok(metadata.len())
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|err| map_io_error(err, path))
}

/// Best-effort read of the first `limit` bytes. A short or failed read
/// returns whatever prefix was available, possibly nothing.
pub fn preview(path: &Path, limit: usize) -> Vec<u8> {
    let Ok(mut file) = File::open(path) else {
        return Vec::new();
    };
    let mut buffer = vec![0u8; limit];
    let mut filled = 0;
    while filled < limit {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(count) => filled += count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    buffer.truncate(filled);
    buffer
}

pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn map_io_error(err: io::Error, path: &Path) -> Error {
    let kind = match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        _ => ErrorKind::Unexpected,
    };
    let message = err.to_string();
    Error::new(kind)
        .with_message(message)
        .with_path(path)
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::{hex_string, preview, read_bytes, require_file, require_nonempty};
    use crate::core::error::ErrorKind;
    use std::fs;

    #[test]
    fn missing_file_maps_to_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.json");
        let err = require_file(&path).expect_err("missing file");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = read_bytes(&path).expect_err("missing file");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn directory_is_not_a_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = require_file(temp.path()).expect_err("directory");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn zero_byte_file_maps_to_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("empty.json");
        fs::write(&path, b"").expect("write");
        assert!(require_file(&path).is_ok());
        let err = require_nonempty(&path).expect_err("empty file");
        assert_eq!(err.kind(), ErrorKind::Empty);
    }

    #[test]
    fn nonempty_file_reports_its_length() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("three.bin");
        fs::write(&path, [1u8, 2, 3]).expect("write");
        assert_eq!(require_nonempty(&path).expect("length"), 3);
    }

    #[test]
    fn preview_returns_short_prefix_without_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("short.bin");
        fs::write(&path, [0xff, 0xfe, 0x7b]).expect("write");
        assert_eq!(preview(&path, 10), vec![0xff, 0xfe, 0x7b]);
        assert_eq!(preview(&path, 2), vec![0xff, 0xfe]);
        assert!(preview(&temp.path().join("absent"), 10).is_empty());
    }

    #[test]
    fn hex_string_is_lowercase_and_contiguous() {
        assert_eq!(hex_string(&[0xff, 0xfe, 0x00, 0x1a]), "fffe001a");
        assert_eq!(hex_string(&[]), "");
    }
}
