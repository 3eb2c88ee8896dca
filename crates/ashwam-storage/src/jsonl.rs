//! Line-oriented JSON reading with graceful degradation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ashwam_core::errors::StorageError;
use ashwam_observability::tracing_setup::events;
use serde_json::Value;

/// Read every JSON value in a JSONL file.
///
/// A missing file yields no values. Blank lines are ignored and lines that
/// are not valid JSON are skipped with a warning. Any other I/O failure is
/// an error.
pub fn read_values(path: &Path) -> Result<Vec<Value>, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "input file absent, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut values = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) => values.push(value),
            Err(err) => events::line_skipped(path, index + 1, &err.to_string()),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let values = read_values(&dir.path().join("absent.jsonl")).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn blank_and_malformed_lines_are_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"a\": 1}}").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "{{not json").unwrap();
        writeln!(file, "[1, 2]").unwrap();

        let values = read_values(file.path()).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["a"], 1);
        assert!(values[1].is_array());
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_values(dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }
}
