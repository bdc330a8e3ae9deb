//! Output file handling

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Creates the sidecar span file
pub struct PhiOutput;

impl PhiOutput {
    /// Create (or truncate) the output file, buffered for the whole
    /// run so the sink is opened exactly once.
    pub fn create(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        Ok(BufWriter::new(file))
    }
}
