//! Parsing of SAM text lines into typed alignment records.
//!
//! Only the mandatory columns the aggregation needs are decoded. Columns are
//! fixed-position and 1-based in the SAM specification; below they are
//! addressed 0-based.

use crate::error::{Error, Result};
use crate::types::{FlagBits, MapQ};
use std::io::BufRead;
use std::path::PathBuf;

/// Minimum number of tab-separated columns in a SAM alignment line.
pub const MIN_COLUMNS: usize = 11;

const QNAME: usize = 0;
const FLAG: usize = 1;
const RNAME: usize = 2;
const POS: usize = 3;
const MAPQ: usize = 4;
const CIGAR: usize = 5;
const SEQ: usize = 9;

/// One alignment line. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    read_name: String,
    flag_bits: FlagBits,
    reference_name: String,
    /// 1-based leftmost mapping position.
    position: i64,
    mapping_quality: MapQ,
    alignment_ops: String,
    sequence: String,
}

impl AlignmentRecord {
    pub fn read_name(&self) -> &str {
        &self.read_name
    }

    pub fn flag_bits(&self) -> FlagBits {
        self.flag_bits
    }

    /// Chromosome / contig name; `*` for unplaced records.
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn mapping_quality(&self) -> MapQ {
        self.mapping_quality
    }

    /// CIGAR column, verbatim.
    pub fn alignment_ops(&self) -> &str {
        &self.alignment_ops
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

/// True for SAM header lines (`@HD`, `@SQ`, `@PG`, ...).
pub fn is_header(line: &str) -> bool {
    line.starts_with('@')
}

/// Parse one non-header line. `line_number` is only used for error reporting.
pub fn parse_record(line_number: usize, line: &str) -> Result<AlignmentRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_COLUMNS {
        return Err(Error::malformed(
            line_number,
            line,
            format!(
                "expected at least {MIN_COLUMNS} tab-separated columns, found {}",
                fields.len()
            ),
        ));
    }

    let flag_bits = parse_int::<FlagBits>(line_number, line, "FLAG", fields[FLAG])?;
    let position = parse_int::<i64>(line_number, line, "POS", fields[POS])?;
    let mapping_quality = parse_int::<MapQ>(line_number, line, "MAPQ", fields[MAPQ])?;

    Ok(AlignmentRecord {
        read_name: fields[QNAME].to_string(),
        flag_bits,
        reference_name: fields[RNAME].to_string(),
        position,
        mapping_quality,
        alignment_ops: fields[CIGAR].to_string(),
        sequence: fields[SEQ].to_string(),
    })
}

fn parse_int<T: std::str::FromStr>(
    line_number: usize,
    line: &str,
    column: &str,
    raw: &str,
) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        Error::malformed(line_number, line, format!("{column} is not a valid integer: {raw:?}"))
    })
}

/// Iterator over the alignment records of a SAM text stream.
///
/// Header lines are skipped and counted. Parsing stops at the first error;
/// the iterator yields that error once and then ends. `source` names the
/// input in `InputUnavailable` errors.
pub struct RecordReader<R> {
    inner: R,
    source: PathBuf,
    buf: Vec<u8>,
    line_number: usize,
    header_lines: u64,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R, source: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            source: source.into(),
            buf: Vec::new(),
            line_number: 0,
            header_lines: 0,
            failed: false,
        }
    }

    /// Number of `@` header lines skipped so far.
    pub fn header_lines(&self) -> u64 {
        self.header_lines
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<AlignmentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    self.failed = true;
                    return Some(Err(Error::InputUnavailable {
                        path: self.source.clone(),
                        source,
                    }));
                }
            }
            self.line_number += 1;

            let line = match std::str::from_utf8(&self.buf) {
                Ok(text) => text.trim_end_matches(['\n', '\r']),
                Err(_) => {
                    self.failed = true;
                    let lossy = String::from_utf8_lossy(&self.buf);
                    return Some(Err(Error::malformed(
                        self.line_number,
                        lossy.trim_end_matches(['\n', '\r']),
                        "line is not valid UTF-8",
                    )));
                }
            };
            if is_header(line) {
                self.header_lines += 1;
                continue;
            }

            let result = parse_record(self.line_number, line);
            if result.is_err() {
                self.failed = true;
            }
            return Some(result);
        }
    }
}
