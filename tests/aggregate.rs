use samtally_rs::aggregate::{flag_interval, percent};
use samtally_rs::pipeline::aggregate;
use samtally_rs::{
    parse_record, AggregationEngine, AlignmentRecord, Error, MappingStatus, PipelineConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn rec(flag: u16, chrom: &str, mapq: u8, cigar: &str) -> AlignmentRecord {
    let line = format!("r\t{flag}\t{chrom}\t100\t{mapq}\t{cigar}\t*\t0\t0\tACGT\tIIII");
    parse_record(1, &line).expect("valid line")
}

fn mixed_records() -> Vec<AlignmentRecord> {
    vec![
        rec(4, "*", 40, "*"),
        rec(0, "chr1", 35, "50M"),
        rec(0, "chr2", 20, "10S40M"),
    ]
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[test]
fn threshold_excludes_low_quality_partial_record() {
    let config = PipelineConfig { min_mapping_quality: 30, only_fully_mapped: false };
    let report = aggregate(&config, &mixed_records());

    let totals = report.status_totals();
    assert_eq!(totals.unmapped, 1);
    assert_eq!(totals.fully_mapped, 1);
    assert_eq!(totals.partially_mapped, 1);

    // The unmapped record has MAPQ 40 and passes the threshold too.
    assert_eq!(report.filtered_total(), 2);
    assert_eq!(report.counts_by_chromosome().get("chr2"), None);
    assert_eq!(report.counts_by_quality().get(&20), None);
}

#[test]
fn only_fully_mapped_also_drops_unmapped() {
    let config = PipelineConfig { min_mapping_quality: 30, only_fully_mapped: true };
    let report = aggregate(&config, &mixed_records());

    assert_eq!(report.status_totals().total(), 3);
    assert_eq!(report.filtered_total(), 1);
    assert_eq!(report.counts_by_chromosome().len(), 1);
    assert_eq!(report.counts_by_chromosome().get("chr1"), Some(&1));
    assert_eq!(report.counts_by_flag().get(&0), Some(&1));
    assert_eq!(report.counts_by_quality().get(&35), Some(&1));
    assert!((report.chromosome_percent("chr1") - 100.0).abs() < 1e-9);
}

#[test]
fn empty_input_yields_zeroes_not_nan() {
    let report = aggregate(&PipelineConfig::default(), &[]);
    assert_eq!(report.status_totals().total(), 0);
    assert_eq!(report.filtered_total(), 0);

    let pct = report.status_percentages();
    assert_eq!(pct.unmapped, 0.0);
    assert_eq!(pct.fully_mapped, 0.0);
    assert_eq!(pct.partially_mapped, 0.0);
    assert_eq!(report.chromosome_percent("chr1"), 0.0);
    assert_eq!(report.flag_percent(0), 0.0);
    assert_eq!(report.quality_percent(60), 0.0);
    assert!(report.sorted_chromosomes().is_empty());
}

#[test]
fn status_and_grouped_percentages_use_different_denominators() {
    let records = vec![
        rec(0, "chr1", 60, "50M"),
        rec(0, "chr1", 10, "50M"),
        rec(4, "*", 0, "*"),
        rec(16, "chr2", 60, "2S48M"),
    ];
    let report = aggregate(&PipelineConfig::default(), &records);

    let pct = report.status_percentages();
    assert!((pct.fully_mapped - 50.0).abs() < 1e-9);
    assert!((pct.unmapped - 25.0).abs() < 1e-9);
    assert!((pct.partially_mapped - 25.0).abs() < 1e-9);

    assert_eq!(report.filtered_total(), 2);
    assert!((report.chromosome_percent("chr1") - 50.0).abs() < 1e-9);
    assert!((report.chromosome_percent("chr2") - 50.0).abs() < 1e-9);
}

#[test]
fn flag_intervals_bucket_by_tens() {
    assert_eq!(flag_interval(0), 0);
    assert_eq!(flag_interval(9), 0);
    assert_eq!(flag_interval(16), 10);
    assert_eq!(flag_interval(99), 90);
    assert_eq!(flag_interval(147), 140);

    let records = vec![
        rec(83, "chr1", 60, "50M"),
        rec(89, "chr1", 60, "50M"),
        rec(99, "chr1", 60, "50M"),
        rec(163, "chr1", 60, "50M"),
    ];
    let report = aggregate(&PipelineConfig::default(), &records);
    let intervals: Vec<(u16, u64)> = report
        .sorted_flag_intervals()
        .into_iter()
        .map(|(k, n, _)| (k, n))
        .collect();
    assert_eq!(intervals, vec![(80, 2), (90, 1), (160, 1)]);
    assert_eq!(report.counts_by_flag().len(), 4);
}

#[test]
fn observe_reports_status_and_admission() {
    let mut engine = AggregationEngine::new(&PipelineConfig::default());
    assert_eq!(engine.observe(&rec(0, "chr1", 60, "50M")), (MappingStatus::FullyMapped, true));
    assert_eq!(
        engine.observe(&rec(0, "chr1", 29, "5H45M")),
        (MappingStatus::PartiallyMapped, false)
    );
    assert_eq!(engine.observe(&rec(4, "*", 0, "*")), (MappingStatus::Unmapped, false));
    let report = engine.finish();
    assert_eq!(report.filtered_total(), 1);
    assert_eq!(report.total_records(), 3);
}

#[test]
fn invalid_threshold_override_keeps_previous_value() {
    let mut config = PipelineConfig::default();
    assert!(config.apply_min_mapping_quality_override("20").is_ok());
    assert_eq!(config.min_mapping_quality, 20);

    for bad in ["abc", "", "12.5", "-1", "256"] {
        let warning = config.apply_min_mapping_quality_override(bad);
        assert!(
            matches!(warning, Err(Error::InvalidConfigurationValue { .. })),
            "{bad:?} should be rejected"
        );
        assert_eq!(config.min_mapping_quality, 20);
    }

    // The run still completes with the retained threshold.
    let report = aggregate(&config, &[rec(0, "chr1", 20, "50M"), rec(0, "chr1", 19, "50M")]);
    assert_eq!(report.filtered_total(), 1);
}

#[test]
fn override_input_is_trimmed() {
    let mut config = PipelineConfig::default();
    assert!(config.apply_min_mapping_quality_override(" 42\n").is_ok());
    assert_eq!(config.min_mapping_quality, 42);
}

#[test]
fn percent_handles_zero_total() {
    assert_eq!(percent(0, 0), 0.0);
    assert_eq!(percent(5, 0), 0.0);
    assert!((percent(1, 4) - 25.0).abs() < 1e-9);
}
