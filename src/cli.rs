// src/cli.rs
use clap::Args;
use std::path::PathBuf;

use crate::config::{PartitionConfig, DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_OUT_DIR};

/// Flags shared by the splitter and the `verify` binary.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// CSV file to split; first line must be the header row
    #[arg(long, env = "CATEGORY_SPLIT_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Column whose values name the output files
    #[arg(long, env = "CATEGORY_SPLIT_COLUMN", default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// Existing directory that receives `<value>.txt` files
    #[arg(long, env = "CATEGORY_SPLIT_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

impl From<ConfigArgs> for PartitionConfig {
    fn from(a: ConfigArgs) -> Self {
        PartitionConfig::new(a.input, a.column, a.out_dir)
    }
}
