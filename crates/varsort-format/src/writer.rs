//! Whole-file writer for count-prefixed record streams

use crate::error::{Error, Result};
use crate::record::Record;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write `records` to the file at `path`, creating or truncating it.
///
/// Fails with [`Error::CannotOpenOutput`] if the file cannot be created.
/// A failure mid-stream leaves a partially written file behind; the
/// format carries no checksum, so readers detect this only through the
/// count header.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::CannotOpenOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let bytes = write_records_to(&mut writer, records)?;
    // Flush explicitly so a buffered short write surfaces here rather
    // than being swallowed on drop.
    writer
        .flush()
        .map_err(|e| Error::on_write(e, "record stream"))?;
    debug!(
        "wrote {} records ({} bytes) to {}",
        records.len(),
        bytes,
        path.display()
    );
    Ok(())
}

/// Write a count-prefixed record stream to `writer`.
///
/// Emits the 4-byte record count, then each record in collection order.
/// Returns the total number of bytes written. A collection the count
/// header cannot represent fails with [`Error::TooManyRecords`].
pub fn write_records_to<W: Write>(writer: &mut W, records: &[Record]) -> Result<u64> {
    writer
        .write_u32::<LittleEndian>(header_count(records.len())?)
        .map_err(|e| Error::on_write(e, "record count header"))?;

    let mut bytes = 4u64;
    for record in records {
        bytes += record.write(writer)? as u64;
    }
    Ok(bytes)
}

/// Count header value for a collection, checked against the header's
/// 4-byte range.
fn header_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::TooManyRecords { count: len })
}
