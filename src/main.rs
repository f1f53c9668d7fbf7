use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use samtally_rs::cli::Args;
use samtally_rs::report::{ReportFormatter, TextReport};
use samtally_rs::{pipeline, PipelineConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            if args.quiet {
                EnvFilter::new("warn")
            } else {
                EnvFilter::new("info")
            }
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = PipelineConfig {
        only_fully_mapped: args.only_fully_mapped,
        ..PipelineConfig::default()
    };
    if let Some(raw) = &args.min_mapq {
        // Already logged as a warning; the default threshold stays in place.
        if config.apply_min_mapping_quality_override(raw).is_err() {
            tracing::debug!(min_mapping_quality = config.min_mapping_quality, "override rejected");
        }
    }

    let output = pipeline::run(&config, &args.in_sam)?;

    let formatter = TextReport::default();
    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create report {}", path.display()))?;
            let mut out = BufWriter::new(file);
            formatter.write_report(&output.report, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            formatter.write_report(&output.report, &mut out)?;
            out.flush()?;
        }
    }

    tracing::info!(
        total_reads = output.stats.total_reads,
        unmapped_reads = output.stats.unmapped_reads,
        filtered_reads = output.stats.filtered_reads,
        header_lines = output.stats.header_lines,
        min_mapping_quality = config.min_mapping_quality,
        "samtally-rs: processing complete"
    );
    Ok(())
}
