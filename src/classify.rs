//! Mapping-status classification from the FLAG and CIGAR columns.

use crate::record::AlignmentRecord;
use crate::types::FlagBits;
use noodles::sam::alignment::record::Flags;

/// Final three-way status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingStatus {
    Unmapped,
    FullyMapped,
    /// Mapped, but part of the read was soft- or hard-clipped.
    PartiallyMapped,
}

/// Decodes the "segment unmapped" bit (0x4). Other bits are ignored.
pub struct FlagClassifier;

impl FlagClassifier {
    pub fn is_unmapped(flag_bits: FlagBits) -> bool {
        Flags::from(flag_bits).is_unmapped()
    }
}

/// Detects soft/hard clip runs in an alignment-operation string.
pub struct AlignmentShapeClassifier;

impl AlignmentShapeClassifier {
    /// True if `ops` contains one or more digits immediately followed by `S` or `H`,
    /// anywhere in the string. Placeholders such as `*` never match.
    pub fn has_clip(ops: &str) -> bool {
        let mut run_digits = 0usize;
        for b in ops.bytes() {
            if b.is_ascii_digit() {
                run_digits += 1;
                continue;
            }
            if run_digits > 0 && matches!(b, b'S' | b'H') {
                return true;
            }
            run_digits = 0;
        }
        false
    }

    /// Status of a record already known to be mapped.
    pub fn classify_mapped(ops: &str) -> MappingStatus {
        if Self::has_clip(ops) {
            MappingStatus::PartiallyMapped
        } else {
            MappingStatus::FullyMapped
        }
    }
}

/// Combine both classifiers. The CIGAR is never inspected for unmapped records.
pub fn classify(record: &AlignmentRecord) -> MappingStatus {
    if FlagClassifier::is_unmapped(record.flag_bits()) {
        MappingStatus::Unmapped
    } else {
        AlignmentShapeClassifier::classify_mapped(record.alignment_ops())
    }
}
