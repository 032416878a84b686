// src/verify.rs
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::process::{self, group_rows, output_path};

/// Expected vs. found state of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub value: String,
    pub path: PathBuf,
    pub expected_rows: usize,
    /// `None` when the file is missing.
    pub found_rows: Option<usize>,
    pub header_matches: bool,
    /// Found rows equal the input rows for this value, in order.
    pub rows_match: bool,
}

impl FileCheck {
    pub fn is_ok(&self) -> bool {
        self.found_rows == Some(self.expected_rows) && self.header_matches && self.rows_match
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub input_rows: usize,
    pub files: Vec<FileCheck>,
}

impl VerifyReport {
    pub fn output_rows(&self) -> usize {
        self.files.iter().filter_map(|f| f.found_rows).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileCheck> {
        self.files.iter().filter(|f| !f.is_ok())
    }

    pub fn is_ok(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Re-derive the groups from the input and compare each against the file a run
/// would have written for it.
///
/// Only the expected paths are read, so nested outputs (`Beer/Wine`) are found
/// and unrelated `.txt` files left in `out_dir` are ignored. Later groups that
/// map to the same path as an earlier one are checked against that same file.
#[instrument(level = "info", skip(cfg), fields(input = %cfg.input.display()))]
pub fn verify_outputs(cfg: &PartitionConfig) -> Result<VerifyReport> {
    let input = process::load(&cfg.input)?;
    let groups = group_rows(&input, &cfg.column)?;

    let mut files = Vec::with_capacity(groups.len());
    for (value, group) in groups {
        let path = output_path(&cfg.out_dir, &value);
        let check = match process::load(&path) {
            Ok(found) => FileCheck {
                header_matches: found.headers == input.headers,
                rows_match: found.rows == group.rows,
                found_rows: Some(found.len()),
                expected_rows: group.len(),
                value,
                path,
            },
            Err(PartitionError::MissingInput { .. }) => FileCheck {
                header_matches: false,
                rows_match: false,
                found_rows: None,
                expected_rows: group.len(),
                value,
                path,
            },
            Err(e) => return Err(e),
        };
        debug!(path = %check.path.display(), ok = check.is_ok(), "checked output");
        files.push(check);
    }

    let report = VerifyReport {
        input_rows: input.len(),
        files,
    };
    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows(),
        ok = report.is_ok(),
        "verified outputs"
    );
    Ok(report)
}
