//! Presentation of an [`AggregationReport`].
//!
//! Formatters only read the report. Charts and other back ends plug in by
//! implementing [`ReportFormatter`].

use crate::aggregate::AggregationReport;
use std::io::{self, Write};

pub trait ReportFormatter {
    fn write_report<W: Write>(&self, report: &AggregationReport, out: &mut W) -> io::Result<()>;
}

/// Sorted plain-text listing.
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    /// Decimal places for percentages.
    pub precision: usize,
}

impl Default for TextReport {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl ReportFormatter for TextReport {
    fn write_report<W: Write>(&self, report: &AggregationReport, out: &mut W) -> io::Result<()> {
        let p = self.precision;
        let totals = report.status_totals();
        let pct = report.status_percentages();

        writeln!(out, "Mapping status ({} reads):", totals.total())?;
        writeln!(out, "  Fully mapped : {} ({:.p$}%)", totals.fully_mapped, pct.fully_mapped)?;
        writeln!(
            out,
            "  Partially mapped : {} ({:.p$}%)",
            totals.partially_mapped, pct.partially_mapped
        )?;
        writeln!(out, "  Unmapped : {} ({:.p$}%)", totals.unmapped, pct.unmapped)?;

        writeln!(out)?;
        writeln!(out, "Reads passing filters: {}", report.filtered_total())?;

        writeln!(out)?;
        writeln!(out, "Reads per flag interval (by 10):")?;
        for (interval, count, share) in report.sorted_flag_intervals() {
            let upper = u32::from(interval) + 9;
            writeln!(out, "  Interval {interval}-{upper} : {count} reads ({share:.p$}%)")?;
        }

        writeln!(out)?;
        writeln!(out, "Reads per flag:")?;
        for (flag, count, share) in report.sorted_flags() {
            writeln!(out, "  Flag {flag} : {count} reads ({share:.p$}%)")?;
        }

        writeln!(out)?;
        writeln!(out, "Reads per chromosome:")?;
        for (chrom, count, share) in report.sorted_chromosomes() {
            writeln!(out, "  Chromosome {chrom} : {count} reads ({share:.p$}%)")?;
        }

        writeln!(out)?;
        writeln!(out, "Reads per mapping quality:")?;
        for (quality, count, share) in report.sorted_qualities() {
            writeln!(out, "  Quality {quality} : {count} reads ({share:.p$}%)")?;
        }
        Ok(())
    }
}

/// Render a report to a string with `formatter`.
pub fn render<F: ReportFormatter>(formatter: &F, report: &AggregationReport) -> io::Result<String> {
    let mut buf = Vec::new();
    formatter.write_report(report, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
