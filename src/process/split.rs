// src/process/split.rs
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

use crate::error::{PartitionError, Result};
use crate::process::Table;

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Every value of `column`, once each, in the order it first appears.
/// An empty field fails with `MissingCategory`, as in `group_rows`.
pub fn distinct_values(table: &Table, column: &str) -> Result<Vec<String>> {
    let idx = table.column_index(column)?;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for (i, row) in table.rows.iter().enumerate() {
        let v = field(row, idx);
        if v.is_empty() {
            return Err(PartitionError::MissingCategory {
                column: column.to_string(),
                row: i + 1,
            });
        }
        if seen.insert(v) {
            values.push(v.to_string());
        }
    }
    Ok(values)
}

/// Rows whose `column` equals `value` exactly, in input order, all columns kept.
pub fn filter_by_value(table: &Table, column: &str, value: &str) -> Result<Table> {
    let idx = table.column_index(column)?;
    let mut out = table.empty_like();
    out.rows = table
        .rows
        .iter()
        .filter(|row| field(row, idx) == value)
        .cloned()
        .collect();
    Ok(out)
}

/// Split `table` into one sub-table per distinct `column` value in a single pass.
///
/// Groups come back in first-seen order and rows keep their input order, so
/// the result is the same as `distinct_values` followed by `filter_by_value`
/// for each value. An empty `column` field fails the whole call with
/// `MissingCategory` before anything is grouped further.
#[instrument(level = "debug", skip(table), fields(rows = table.len()))]
pub fn group_rows(table: &Table, column: &str) -> Result<Vec<(String, Table)>> {
    let idx = table.column_index(column)?;

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Table)> = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let value = field(row, idx);
        if value.is_empty() {
            return Err(PartitionError::MissingCategory {
                column: column.to_string(),
                row: i + 1,
            });
        }
        let slot = *slots.entry(value).or_insert_with(|| {
            groups.push((value.to_string(), table.empty_like()));
            groups.len() - 1
        });
        groups[slot].1.rows.push(row.clone());
    }

    debug!(groups = groups.len(), "grouped rows");
    Ok(groups)
}
