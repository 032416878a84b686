// src/bin/verify.rs
//! Cross-check a finished split: every group of the input must be in the file a
//! run writes for it, with the input header and the same rows in order.

use anyhow::{anyhow, Context, Result};
use category_split::{cli::ConfigArgs, verify_outputs, PartitionConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "verify", version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    let cfg: PartitionConfig = Cli::parse().config.into();

    let report = verify_outputs(&cfg)
        .with_context(|| format!("verifying outputs of {}", cfg.input.display()))?;

    println!("\n{: <40} {:>10} {:>10} {:>8}", "File", "Expected", "Found", "Status");
    println!("{:-<71}", "");
    for f in &report.files {
        let found = f
            .found_rows
            .map(|n| n.to_string())
            .unwrap_or_else(|| "missing".to_string());
        let status = if f.is_ok() {
            "ok"
        } else if f.found_rows.is_none() {
            "missing"
        } else if !f.header_matches {
            "header"
        } else {
            "rows"
        };
        println!(
            "{: <40} {:>10} {:>10} {:>8}",
            f.path.display(),
            f.expected_rows,
            found,
            status
        );
    }

    let delta = report.output_rows() as isize - report.input_rows as isize;
    println!("{:-<71}", "");
    println!("{: <40} {:>10}", cfg.input.display(), report.input_rows);
    println!("{: <40} {:>10}", "outputs total", report.output_rows());
    println!("{: <40} {:>10}", "delta vs input", delta);

    let failed: Vec<String> = report
        .failures()
        .map(|f| f.path.display().to_string())
        .collect();
    if !failed.is_empty() {
        return Err(anyhow!("{} output(s) do not match input: {}", failed.len(), failed.join(", ")));
    }
    Ok(())
}
