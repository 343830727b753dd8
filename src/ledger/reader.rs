//! Semicolon-delimited ledger export reader
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::error::{LedgerError, Result};
use super::record::LedgerRecord;

pub const DELIMITER: u8 = b';';

/// Read a ledger export, discarding its header row.
///
/// Rows may carry different numbers of fields. Exports are not guaranteed to
/// be UTF-8 (customer names are often Latin-1), so fields are read as bytes.
pub fn read_ledger(path: &Path) -> Result<Vec<LedgerRecord>> {
    let file = File::open(path).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_ledger(file).map_err(|err| match err {
        ParseFailure::Empty => LedgerError::MissingHeader {
            path: path.to_path_buf(),
        },
        ParseFailure::Csv(source) => LedgerError::Csv {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), records = records.len(), "Ledger file read");
    Ok(records)
}

enum ParseFailure {
    Empty,
    Csv(csv::Error),
}

fn parse_ledger<R: Read>(input: R) -> std::result::Result<Vec<LedgerRecord>, ParseFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = reader.byte_records();

    match rows.next() {
        Some(header) => {
            header.map_err(ParseFailure::Csv)?;
        }
        None => return Err(ParseFailure::Empty),
    }

    rows.map(|row| row.map(|record| LedgerRecord::from(&record)))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(ParseFailure::Csv)
}
