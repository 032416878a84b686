pub mod cli;
pub mod config;
pub mod error;
pub mod partitioner;
pub mod process;
pub mod verify;

pub use config::PartitionConfig;
pub use error::{PartitionError, Result};
pub use partitioner::{GroupOutput, PartitionReport, Partitioner, COMPLETION_MESSAGE};
pub use process::{
    distinct_values, filter_by_value, group_rows, load, output_path, reserved_chars,
    sanitize_for_filename, write, Table,
};
pub use verify::{verify_outputs, FileCheck, VerifyReport};
