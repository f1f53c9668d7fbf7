use crate::error::{Error, Result};
use crate::record::{AlignmentRecord, RecordReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// All records of one input, in file order.
#[derive(Debug, Default)]
pub struct ParsedInput {
    pub records: Vec<AlignmentRecord>,
    pub header_lines: u64,
}

/// Open a SAM text file for reading.
pub fn open_sam(path: &Path) -> Result<RecordReader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RecordReader::new(BufReader::new(file), path))
}

/// Read and parse a whole SAM text file. Fails on the first unreadable or
/// malformed line; no partial result is returned. The file handle is closed
/// on every path out of this function.
pub fn read_records(path: &Path) -> Result<ParsedInput> {
    let reader = open_sam(path)?;
    collect_records(reader)
}

/// Same as [`read_records`] for an in-memory or already opened stream.
pub fn read_records_from<R: BufRead>(inner: R, source: &Path) -> Result<ParsedInput> {
    collect_records(RecordReader::new(inner, source))
}

fn collect_records<R: BufRead>(mut reader: RecordReader<R>) -> Result<ParsedInput> {
    let mut records = Vec::new();
    for result in reader.by_ref() {
        records.push(result?);
    }
    tracing::debug!(
        records = records.len(),
        header_lines = reader.header_lines(),
        lines = reader.lines_read(),
        "input parsed"
    );
    Ok(ParsedInput {
        records,
        header_lines: reader.header_lines(),
    })
}
