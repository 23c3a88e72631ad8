//! Whole-file reader for count-prefixed record streams

use crate::error::{Error, Result};
use crate::record::Record;
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

/// Read every record from the file at `path`.
///
/// Fails with [`Error::CannotOpenInput`] if the file cannot be opened.
/// The file descriptor is released when the reader goes out of scope,
/// on success and on error alike.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| Error::CannotOpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let records = read_records_from(&mut reader)?;
    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a count-prefixed record stream from `reader`.
///
/// Reads the 4-byte record count, then decodes exactly that many records
/// in stream order. Any decode failure aborts the whole read and the
/// partially built collection is dropped; a header that declares more
/// records than the stream contains is [`Error::TruncatedInput`].
pub fn read_records_from<R: Read>(reader: &mut R) -> Result<Vec<Record>> {
    let count = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| Error::on_read(e, "record count header"))?;

    // The count is file-supplied, so reserve through the checked path.
    let mut records = Vec::new();
    records
        .try_reserve_exact(count as usize)
        .map_err(|_| Error::OutOfMemory {
            elements: count as usize,
        })?;

    for index in 0..count {
        let record = Record::read(reader)?;
        trace!(
            "record {}: key={}, payload_length={}",
            index,
            record.key,
            record.payload.len()
        );
        records.push(record);
    }

    Ok(records)
}
