//! File and directory helpers
//!
//! Plumbing around the algorithmic core: whole-file reads with newline
//! normalization, whole-file writes, and directory listing by
//! extension. All operations are synchronous and one-shot.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Read a whole text file into one string with every carriage return
/// stripped, so line breaks are a single `'\n'` regardless of platform.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.replace('\r', ""))
}

/// Read a text file and split it into lines.
///
/// Newlines are normalized first, so a CRLF file yields the same lines
/// as an LF file. A trailing newline produces a final empty line, like
/// splitting the raw string would.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = read_to_string(path)?;
    Ok(contents.split('\n').map(str::to_string).collect())
}

/// Write a string to a file, replacing any existing contents
pub fn save_string(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

/// Names of directory entries whose file name ends with `extension`.
///
/// The match is a plain suffix test (pass `".txt"` or `"txt"`), not a
/// parsed-extension comparison, so multi-dot suffixes like
/// `".tag.txt"` work too.
pub fn files_with_extension(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(extension) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Create a directory (and any missing parents); succeeds if it already
/// exists
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_strips_carriage_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, "first\r\nsecond\r\nthird").unwrap();

        let contents = read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\nthird");
    }

    #[test]
    fn test_read_lines_crlf_and_lf_agree() {
        let dir = tempfile::tempdir().unwrap();
        let crlf = dir.path().join("crlf.txt");
        let lf = dir.path().join("lf.txt");
        fs::write(&crlf, "a\r\nb\r\n").unwrap();
        fs::write(&lf, "a\nb\n").unwrap();

        assert_eq!(read_lines(&crlf).unwrap(), read_lines(&lf).unwrap());
        assert_eq!(read_lines(&lf).unwrap(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_save_and_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save_string(&path, "nous nous levons tôt\n").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "nous nous levons tôt\n");
    }

    #[test]
    fn test_files_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("c.csv"), "").unwrap();

        let names = files_with_extension(dir.path(), ".txt").unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        create_directory(&nested).unwrap();
        create_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_to_string(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, crate::errors::Error::Io(_)));
    }
}
