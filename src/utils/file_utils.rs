/// File handling utilities
///
/// This module loads the two input texts. Files are decoded as UTF-8 and line
/// endings are normalised before the content is split into characters.

use std::fs;
use std::path::Path;

use log::info;

use crate::core::errors::{MappingError, Result};

/// Normalise `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }

    let mut normalized = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

/// Read a whole text file as a sequence of characters.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The decoded characters, or a `Read` error carrying the I/O cause
pub fn read_chars(file_path: &Path) -> Result<Vec<char>> {
    let content = fs::read_to_string(file_path).map_err(|e| MappingError::read(file_path, e))?;
    let chars: Vec<char> = normalize_newlines(&content).chars().collect();
    info!("Read {} characters from {}", chars.len(), file_path.display());
    Ok(chars)
}

/// Read the source and target texts. The target is not touched if the
/// source cannot be read.
pub fn load_pair(source_path: &Path, target_path: &Path) -> Result<(Vec<char>, Vec<char>)> {
    let source = read_chars(source_path)?;
    let target = read_chars(target_path)?;
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
        assert_eq!(normalize_newlines("plain"), "plain");
    }

    #[test]
    fn test_read_chars_counts_characters_not_bytes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("utf8.txt");
        fs::write(&path, "héllo, 世界\r\n").expect("Failed to write file");

        let chars = read_chars(&path).expect("Failed to read file");
        assert_eq!(chars.len(), 10);
        assert_eq!(chars.last(), Some(&'\n'));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.txt");

        match read_chars(&path) {
            Err(MappingError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).expect("Failed to write file");

        assert!(matches!(read_chars(&path), Err(MappingError::Read { .. })));
    }

    #[test]
    fn test_load_pair_stops_at_source() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("target.txt");
        fs::write(&target, "xyz").expect("Failed to write file");

        let err = load_pair(&dir.path().join("nope.txt"), &target).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
