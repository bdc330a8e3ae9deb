//! Input file handling

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens record dumps for forward-only line reading
pub struct RecordInput;

impl RecordInput {
    /// Open a record dump for buffered sequential reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::BufRead;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.txt");
        fs::write(&file_path, "line one\nline two\n").unwrap();

        let reader = RecordInput::open(&file_path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, ["line one", "line two"]);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = RecordInput::open(Path::new("/nonexistent/records.txt"));

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to open input file"));
    }
}
