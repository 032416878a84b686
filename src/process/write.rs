// src/process/write.rs
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{fs::File, path::Path};
use tracing::debug;

use crate::error::{write_error, PartitionError, Result};
use crate::process::Table;

/// Write `table` as CSV to `path`, header row first.
///
/// - an existing file is truncated and replaced
/// - the parent directory is never created; if it is missing the open fails
/// - fields are quoted only when needed, records end with `\n`
pub fn write<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();

    // 1) Open (create or truncate) the target
    let file = File::create(path).map_err(|e| PartitionError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    // 2) Header + rows, byte-for-byte as loaded
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);
    wtr.write_record(&table.headers)
        .map_err(|e| write_error(path, e))?;
    for row in &table.rows {
        wtr.write_record(row).map_err(|e| write_error(path, e))?;
    }

    // 3) Flush here so a failed write is reported instead of lost on drop
    wtr.flush().map_err(|e| PartitionError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}
