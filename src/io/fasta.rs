// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal FASTA reader that concatenates records for BD-BWT indexing.
//!
//! Unlike a general-purpose FASTA parser, this reader has exactly one job: turn a multi-record
//! FASTA file into the single byte string the index is built over, with each record's sequence
//! preceded by a separator byte so that matches cannot cross a record boundary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::IoError;

/// Reads `path` and concatenates every record's sequence, uppercased, each preceded by
/// `separator`. A header line (`>...`) or end of file flushes the record accumulated so far.
///
/// The caller is responsible for appending a final trailing `separator`, so that with `n` records
/// the returned bytes plus one trailing separator form `separator rec1 separator rec2 ... recn
/// separator`.
pub fn read_fasta_concatenated(path: &Path, separator: u8) -> Result<Vec<u8>, IoError> {
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    let mut record = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| IoError::Read {
            path: path.display().to_string(),
            source,
        })?;
        if line.starts_with('>') {
            flush(&mut out, &mut record, separator);
            continue;
        }
        record.extend(line.bytes().map(|b| b.to_ascii_uppercase()));
    }
    flush(&mut out, &mut record, separator);

    Ok(out)
}

fn flush(out: &mut Vec<u8>, record: &mut Vec<u8>, separator: u8) {
    if record.is_empty() {
        return;
    }
    out.push(separator);
    out.append(record);
}
