// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "one-stop-wholesalers.csv";
pub const DEFAULT_COLUMN: &str = "Category";
pub const DEFAULT_OUT_DIR: &str = "data";

/// Where to read from, which column to group on, and where the groups go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionConfig {
    pub input: PathBuf,
    pub column: String,
    /// Must already exist; it is never created.
    pub out_dir: PathBuf,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            column: DEFAULT_COLUMN.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl PartitionConfig {
    pub fn new(input: impl Into<PathBuf>, column: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            column: column.into(),
            out_dir: out_dir.into(),
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }
}
