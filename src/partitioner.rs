// src/partitioner.rs
use std::{collections::HashSet, io::Write, path::PathBuf, time::Instant};
use tracing::{debug, info, instrument, warn};

use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::process::{self, group_rows, output_path, reserved_chars};

pub const COMPLETION_MESSAGE: &str = "All txt files have been generated.";

/// One written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutput {
    pub value: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// What a completed run produced, groups in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionReport {
    pub input_rows: usize,
    pub groups: Vec<GroupOutput>,
}

impl PartitionReport {
    pub fn output_rows(&self) -> usize {
        self.groups.iter().map(|g| g.rows).sum()
    }
}

pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Load the input, split it on the configured column, and write one file per value.
    ///
    /// `console` receives a `Created CSV: <path>` line after each file and the
    /// completion line at the end. Any error stops the run where it happens;
    /// files already written stay on disk. Load, column and empty-value errors
    /// all surface before the first file is opened.
    #[instrument(
        level = "info",
        skip(self, console),
        fields(input = %self.config.input.display(), column = %self.config.column)
    )]
    pub fn run<W: Write>(&self, console: &mut W) -> Result<PartitionReport> {
        let start = Instant::now();
        let cfg = &self.config;

        // ─── 1) load ───────────────────────────────────────────────────
        let table = process::load(&cfg.input)?;

        // ─── 2) group by column ────────────────────────────────────────
        let groups = group_rows(&table, &cfg.column)?;
        info!(groups = groups.len(), rows = table.len(), "found distinct values");

        // ─── 3) write each group ───────────────────────────────────────
        let mut outputs = Vec::with_capacity(groups.len());
        let mut written: HashSet<PathBuf> = HashSet::with_capacity(groups.len());
        for (value, group) in groups {
            let path = output_path(&cfg.out_dir, &value);

            let reserved = reserved_chars(&value);
            if !reserved.is_empty() {
                warn!(
                    value = %value,
                    chars = ?reserved,
                    path = %path.display(),
                    "value contains reserved characters; writing unsanitized path"
                );
            }

            if !written.insert(path.clone()) {
                warn!(
                    value = %value,
                    path = %path.display(),
                    "output path collides with an earlier value; overwriting its file"
                );
            }

            process::write(&group, &path)?;
            writeln!(console, "Created CSV: {}", path.display()).map_err(PartitionError::Console)?;
            debug!(value = %value, rows = group.len(), "group done");

            outputs.push(GroupOutput {
                value,
                path,
                rows: group.len(),
            });
        }

        // ─── 4) done ───────────────────────────────────────────────────
        writeln!(console, "{}", COMPLETION_MESSAGE).map_err(PartitionError::Console)?;
        info!(files = outputs.len(), "completed in {:?}", start.elapsed());

        Ok(PartitionReport {
            input_rows: table.len(),
            groups: outputs,
        })
    }
}
