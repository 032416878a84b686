// src/process/mod.rs
pub mod split;
pub mod utils;
pub mod write;

use csv::ReaderBuilder;
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::error::{PartitionError, Result};

pub use split::{distinct_values, filter_by_value, group_rows};
pub use utils::{output_path, reserved_chars, sanitize_for_filename};
pub use write::write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the header row of the file.
    pub headers: Vec<String>,
    /// Each data row, one String per header, in file order.
    pub rows: Vec<Vec<String>>,
    /// File the table was loaded from; carried into error messages.
    pub source: PathBuf,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, source: impl Into<PathBuf>) -> Self {
        Self {
            headers,
            rows,
            source: source.into(),
        }
    }

    /// Same headers and source, no rows.
    pub fn empty_like(&self) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: Vec::new(),
            source: self.source.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `column` in the header row.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| PartitionError::MissingColumn {
                column: column.to_string(),
                path: self.source.clone(),
            })
    }
}

fn read_error(path: &Path, err: csv::Error) -> PartitionError {
    if !err.is_io_error() {
        return PartitionError::Parse {
            path: path.to_path_buf(),
            source: err,
        };
    }
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
    };
    PartitionError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Read the whole CSV at `path` into memory.
///
/// The first record is the header row. A UTF-8 byte-order mark in front of the
/// first header name is dropped. Every following record must have as many
/// fields as the header; blank lines are skipped by the reader.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PartitionError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => PartitionError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| read_error(path, e))?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    debug!(columns = headers.len(), "read header row");

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| read_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!(rows = rows.len(), "loaded table");
    Ok(Table::new(headers, rows, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,category_split=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn csv_file(content: &str) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        Ok(tmp)
    }

    #[test]
    fn test_load_wholesaler_sample() -> Result<()> {
        init_test_logging();
        let tmp = csv_file(
            "Category,Name,Price\n\
             Fruits,Apple,1.50\n\
             Fruits,Pear,2\n\
             Dairy Products,\"Milk, whole\",0.99\n",
        )?;

        let table = load(tmp.path())?;

        assert_eq!(table.headers, vec!["Category", "Name", "Price"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0], vec!["Fruits", "Apple", "1.50"]);
        assert_eq!(table.rows[2][1], "Milk, whole");
        assert_eq!(table.source, tmp.path());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("definitely/not/here.csv").unwrap_err();
        assert!(
            matches!(err, PartitionError::MissingInput { ref path } if path == Path::new("definitely/not/here.csv")),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_load_ragged_row_is_parse_error() -> Result<()> {
        let tmp = csv_file("Category,Name\nFruits,Apple\nDairy\n")?;
        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, PartitionError::Parse { .. }), "got {:?}", err);
        Ok(())
    }

    #[test]
    fn test_load_invalid_utf8_is_parse_error() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"Category,Name\nFruits,\xff\xfe\n")?;
        tmp.flush()?;
        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, PartitionError::Parse { .. }), "got {:?}", err);
        Ok(())
    }

    #[test]
    fn test_load_strips_bom_from_first_header() -> Result<()> {
        let tmp = csv_file("\u{feff}Category,Name\nFruits,Apple\n")?;
        let table = load(tmp.path())?;
        assert_eq!(table.column_index("Category")?, 0);
        Ok(())
    }

    #[test]
    fn test_column_index_missing() -> Result<()> {
        let tmp = csv_file("Kind,Name\nFruits,Apple\n")?;
        let table = load(tmp.path())?;
        let err = table.column_index("Category").unwrap_err();
        assert!(
            matches!(err, PartitionError::MissingColumn { ref column, .. } if column == "Category"),
            "got {:?}",
            err
        );
        Ok(())
    }

    #[test]
    fn test_load_header_only() -> Result<()> {
        let tmp = csv_file("Category,Name\n")?;
        let table = load(tmp.path())?;
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 2);
        Ok(())
    }
}
