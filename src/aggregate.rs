//! Grouped counts over one pass of alignment records.
//!
//! Two denominators are in play and they are kept apart on purpose:
//! status counts cover every parsed record, while the flag, chromosome and
//! quality groupings only cover records that passed the [`QualityFilter`].

use crate::classify::{classify, MappingStatus};
use crate::filter::{PipelineConfig, QualityFilter};
use crate::record::AlignmentRecord;
use crate::types::{FlagBits, HashMap, MapQ};
use std::hash::Hash;

/// Per-status totals over the unfiltered record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTotals {
    pub unmapped: u64,
    /// Mapped with no clipping.
    pub fully_mapped: u64,
    pub partially_mapped: u64,
}

impl StatusTotals {
    pub fn total(&self) -> u64 {
        self.unmapped + self.fully_mapped + self.partially_mapped
    }

    /// Fully plus partially mapped.
    pub fn mapped(&self) -> u64 {
        self.fully_mapped + self.partially_mapped
    }

    fn add(&mut self, status: MappingStatus) {
        match status {
            MappingStatus::Unmapped => self.unmapped += 1,
            MappingStatus::FullyMapped => self.fully_mapped += 1,
            MappingStatus::PartiallyMapped => self.partially_mapped += 1,
        }
    }
}

/// Status percentages, all against [`StatusTotals::total`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusPercentages {
    pub unmapped: f64,
    pub fully_mapped: f64,
    pub partially_mapped: f64,
}

/// `count / total * 100`, or 0 when `total` is 0.
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Flag-interval bucket: the flag rounded down to a multiple of ten.
pub fn flag_interval(flag_bits: FlagBits) -> FlagBits {
    (flag_bits / 10) * 10
}

/// Counters for a single run. Build one per input; never reused.
#[derive(Debug)]
pub struct AggregationEngine {
    filter: QualityFilter,
    counts_by_flag: HashMap<FlagBits, u64>,
    counts_by_flag_interval: HashMap<FlagBits, u64>,
    counts_by_chromosome: HashMap<String, u64>,
    counts_by_quality: HashMap<MapQ, u64>,
    status_totals: StatusTotals,
    filtered_total: u64,
}

impl AggregationEngine {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            filter: config.quality_filter(),
            counts_by_flag: HashMap::default(),
            counts_by_flag_interval: HashMap::default(),
            counts_by_chromosome: HashMap::default(),
            counts_by_quality: HashMap::default(),
            status_totals: StatusTotals::default(),
            filtered_total: 0,
        }
    }

    /// Count one record. Returns its status and whether it reached the grouped counters.
    pub fn observe(&mut self, record: &AlignmentRecord) -> (MappingStatus, bool) {
        let status = classify(record);
        self.status_totals.add(status);

        if !self.filter.passes(record, status) {
            return (status, false);
        }

        let flag = record.flag_bits();
        *self.counts_by_flag.entry(flag).or_insert(0) += 1;
        *self.counts_by_flag_interval.entry(flag_interval(flag)).or_insert(0) += 1;
        // Avoid allocating a key for chromosomes already seen.
        match self.counts_by_chromosome.get_mut(record.reference_name()) {
            Some(n) => *n += 1,
            None => {
                self.counts_by_chromosome.insert(record.reference_name().to_string(), 1);
            }
        }
        *self.counts_by_quality.entry(record.mapping_quality()).or_insert(0) += 1;
        self.filtered_total += 1;

        (status, true)
    }

    pub fn extend<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a AlignmentRecord>,
    {
        for record in records {
            self.observe(record);
        }
    }

    pub fn finish(self) -> AggregationReport {
        AggregationReport {
            counts_by_flag: self.counts_by_flag,
            counts_by_flag_interval: self.counts_by_flag_interval,
            counts_by_chromosome: self.counts_by_chromosome,
            counts_by_quality: self.counts_by_quality,
            status_totals: self.status_totals,
            filtered_total: self.filtered_total,
        }
    }
}

/// Read-only result of one run, handed to a [`crate::report::ReportFormatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    counts_by_flag: HashMap<FlagBits, u64>,
    counts_by_flag_interval: HashMap<FlagBits, u64>,
    counts_by_chromosome: HashMap<String, u64>,
    counts_by_quality: HashMap<MapQ, u64>,
    status_totals: StatusTotals,
    filtered_total: u64,
}

impl AggregationReport {
    pub fn counts_by_flag(&self) -> &HashMap<FlagBits, u64> {
        &self.counts_by_flag
    }

    /// Keyed by `10 * (flag / 10)`.
    pub fn counts_by_flag_interval(&self) -> &HashMap<FlagBits, u64> {
        &self.counts_by_flag_interval
    }

    pub fn counts_by_chromosome(&self) -> &HashMap<String, u64> {
        &self.counts_by_chromosome
    }

    pub fn counts_by_quality(&self) -> &HashMap<MapQ, u64> {
        &self.counts_by_quality
    }

    pub fn status_totals(&self) -> StatusTotals {
        self.status_totals
    }

    /// Records that reached the grouped counters.
    pub fn filtered_total(&self) -> u64 {
        self.filtered_total
    }

    /// Every parsed record, filtered or not.
    pub fn total_records(&self) -> u64 {
        self.status_totals.total()
    }

    pub fn status_percentages(&self) -> StatusPercentages {
        let total = self.status_totals.total();
        StatusPercentages {
            unmapped: percent(self.status_totals.unmapped, total),
            fully_mapped: percent(self.status_totals.fully_mapped, total),
            partially_mapped: percent(self.status_totals.partially_mapped, total),
        }
    }

    pub fn chromosome_percent(&self, chromosome: &str) -> f64 {
        let count = self.counts_by_chromosome.get(chromosome).copied().unwrap_or(0);
        percent(count, self.filtered_total)
    }

    pub fn flag_percent(&self, flag_bits: FlagBits) -> f64 {
        percent(self.counts_by_flag.get(&flag_bits).copied().unwrap_or(0), self.filtered_total)
    }

    pub fn flag_interval_percent(&self, interval: FlagBits) -> f64 {
        let count = self.counts_by_flag_interval.get(&interval).copied().unwrap_or(0);
        percent(count, self.filtered_total)
    }

    pub fn quality_percent(&self, quality: MapQ) -> f64 {
        percent(self.counts_by_quality.get(&quality).copied().unwrap_or(0), self.filtered_total)
    }

    /// `(key, count, percent of filtered_total)` sorted by key.
    pub fn sorted_flag_intervals(&self) -> Vec<(FlagBits, u64, f64)> {
        sorted_with_percent(&self.counts_by_flag_interval, self.filtered_total)
    }

    pub fn sorted_flags(&self) -> Vec<(FlagBits, u64, f64)> {
        sorted_with_percent(&self.counts_by_flag, self.filtered_total)
    }

    pub fn sorted_chromosomes(&self) -> Vec<(String, u64, f64)> {
        sorted_with_percent(&self.counts_by_chromosome, self.filtered_total)
    }

    pub fn sorted_qualities(&self) -> Vec<(MapQ, u64, f64)> {
        sorted_with_percent(&self.counts_by_quality, self.filtered_total)
    }
}

fn sorted_with_percent<K>(counts: &HashMap<K, u64>, total: u64) -> Vec<(K, u64, f64)>
where
    K: Clone + Ord + Hash + Eq,
{
    let mut rows: Vec<(K, u64, f64)> = counts
        .iter()
        .map(|(k, &n)| (k.clone(), n, percent(n, total)))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}
