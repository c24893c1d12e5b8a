//! Puzzle input sources

use crate::error::CliError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a day's input is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects standard input; anything else is a file path
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }

    /// Conventional location of a day's input relative to the working directory
    pub fn default_for(year: u16, day: u8) -> Self {
        InputSource::File(
            Path::new("input")
                .join(year.to_string())
                .join(format!("day-{:02}.txt", day)),
        )
    }

    /// Read the whole input into memory
    pub fn read(&self) -> Result<String, CliError> {
        match self {
            InputSource::Stdin => read_all(io::stdin().lock(), Path::new("-")),
            InputSource::File(path) => fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            }),
        }
    }
}

fn read_all(mut reader: impl Read, path: &Path) -> Result<String, CliError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(InputSource::from_path(PathBuf::from("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path(PathBuf::from("day.txt")),
            InputSource::File(PathBuf::from("day.txt"))
        );
    }

    #[test]
    fn test_default_path_format() {
        let InputSource::File(path) = InputSource::default_for(2023, 7) else {
            panic!("expected a file source");
        };
        assert_eq!(path, Path::new("input").join("2023").join("day-07.txt"));
    }

    #[test]
    fn test_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1abc2\npqr3stu8vwx\n").unwrap();

        let source = InputSource::from_path(file.path().to_path_buf());
        assert_eq!(source.read().unwrap(), "1abc2\npqr3stu8vwx\n");
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("day-01.txt");

        let err = InputSource::File(missing.clone()).read().unwrap_err();
        match err {
            CliError::Input { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let err = read_all(&[0xff, 0xfe][..], Path::new("-")).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }
}
