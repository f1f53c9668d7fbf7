use crate::aggregate::{AggregationEngine, AggregationReport};
use crate::error::Result;
use crate::filter::PipelineConfig;
use crate::input::{self, ParsedInput};
use crate::record::AlignmentRecord;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_reads: u64,
    pub unmapped_reads: u64,
    pub header_lines: u64,
    pub filtered_reads: u64,
}

#[derive(Debug)]
pub struct RunOutput {
    pub report: AggregationReport,
    pub stats: Stats,
}

/// Read `path` and aggregate it with `config`.
///
/// Parsing finishes before any counting starts, so a malformed line aborts
/// the run with no counters touched.
pub fn run(config: &PipelineConfig, path: &Path) -> Result<RunOutput> {
    let parsed = input::read_records(path)?;
    Ok(run_parsed(config, &parsed))
}

pub fn run_parsed(config: &PipelineConfig, parsed: &ParsedInput) -> RunOutput {
    let report = aggregate(config, &parsed.records);
    let totals = report.status_totals();
    let stats = Stats {
        total_reads: totals.total(),
        unmapped_reads: totals.unmapped,
        header_lines: parsed.header_lines,
        filtered_reads: report.filtered_total(),
    };
    RunOutput { report, stats }
}

/// Aggregate already parsed records in one pass.
pub fn aggregate(config: &PipelineConfig, records: &[AlignmentRecord]) -> AggregationReport {
    tracing::debug!(
        min_mapping_quality = config.min_mapping_quality,
        only_fully_mapped = config.only_fully_mapped,
        records = records.len(),
        "aggregating"
    );
    let mut engine = AggregationEngine::new(config);
    engine.extend(records);
    engine.finish()
}
