use crate::classify::MappingStatus;
use crate::error::Error;
use crate::record::AlignmentRecord;
use crate::types::MapQ;

pub const DEFAULT_MIN_MAPPING_QUALITY: MapQ = 30;

/// Settings for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Records below this MAPQ are left out of the grouped counts.
    pub min_mapping_quality: MapQ,
    /// Leave unmapped records out of the grouped counts regardless of MAPQ.
    pub only_fully_mapped: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_mapping_quality: DEFAULT_MIN_MAPPING_QUALITY,
            only_fully_mapped: false,
        }
    }
}

impl PipelineConfig {
    /// Replace the MAPQ threshold from user text.
    ///
    /// Invalid input (not an integer in 0..=255) keeps the current threshold,
    /// logs a warning and returns the rejected value. Callers are expected to
    /// continue with the retained threshold.
    pub fn apply_min_mapping_quality_override(&mut self, raw: &str) -> Result<(), Error> {
        match raw.trim().parse::<MapQ>() {
            Ok(q) => {
                tracing::debug!(min_mapping_quality = q, "mapping quality threshold set");
                self.min_mapping_quality = q;
                Ok(())
            }
            Err(_) => {
                let err = Error::InvalidConfigurationValue {
                    parameter: "min_mapping_quality",
                    value: raw.to_string(),
                };
                tracing::warn!(
                    retained = self.min_mapping_quality,
                    "{err}; keeping previous threshold"
                );
                Err(err)
            }
        }
    }

    pub fn quality_filter(&self) -> QualityFilter {
        QualityFilter {
            min_mapping_quality: self.min_mapping_quality,
            only_fully_mapped: self.only_fully_mapped,
        }
    }
}

/// Gate in front of the grouped counters.
#[derive(Debug, Clone, Copy)]
pub struct QualityFilter {
    min_mapping_quality: MapQ,
    only_fully_mapped: bool,
}

impl QualityFilter {
    pub fn passes(&self, record: &AlignmentRecord, status: MappingStatus) -> bool {
        if self.only_fully_mapped && status == MappingStatus::Unmapped {
            return false;
        }
        record.mapping_quality() >= self.min_mapping_quality
    }
}
