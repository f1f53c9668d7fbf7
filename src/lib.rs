//! samtally-rs: mapping-status and distribution summaries for SAM text files.
//!
//! # Library usage
//!
//! ```no_run
//! use samtally_rs::{pipeline, PipelineConfig};
//! use samtally_rs::report::{render, TextReport};
//! use std::path::Path;
//!
//! let mut config = PipelineConfig::default();
//! config.apply_min_mapping_quality_override("20")?;
//! let output = pipeline::run(&config, Path::new("mapping.sam"))?;
//! let totals = output.report.status_totals();
//! println!("{} unmapped of {}", totals.unmapped, totals.total());
//! print!("{}", render(&TextReport::default(), &output.report)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod error;
pub mod filter;
pub mod input;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod types;

// Flat re-exports for the most commonly used types.
pub use aggregate::{AggregationEngine, AggregationReport, StatusPercentages, StatusTotals};
pub use classify::{classify, AlignmentShapeClassifier, FlagClassifier, MappingStatus};
pub use error::{Error, Result};
pub use filter::{PipelineConfig, QualityFilter, DEFAULT_MIN_MAPPING_QUALITY};
pub use record::{parse_record, AlignmentRecord, RecordReader};
