use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub mod json_writer;
pub mod render;
pub mod summary;
pub mod tsv_writer;

pub(crate) fn create_buffered(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let writer = create_buffered(path)?;
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
