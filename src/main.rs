use anyhow::{Context, Result};
use category_split::{cli::ConfigArgs, PartitionError, Partitioner};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Split a CSV file into one `<value>.txt` per distinct value of a column.
#[derive(Parser, Debug)]
#[command(name = "category-split", version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn run(cli: Cli) -> Result<()> {
    let partitioner = Partitioner::new(cli.config.into());
    let stdout = io::stdout();
    let mut console = stdout.lock();

    let report = partitioner
        .run(&mut console)
        .with_context(|| format!("splitting {}", partitioner.config().input.display()))?;
    console.flush()?;

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows(),
        files = report.groups.len(),
        "done"
    );
    Ok(())
}

fn main() {
    // ─── 1) init logging (stderr, stdout is for progress lines) ────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) parse flags and run ─────────────────────────────────────────
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<PartitionError>()
            .map(PartitionError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
