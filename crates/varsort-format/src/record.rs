//! On-disk record layout and single-record codec

use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Maximum number of payload elements a single record may carry.
pub const MAX_PAYLOAD_ELEMENTS: u32 = 512;

/// One keyed unit of data: a signed key and a variable-length payload.
///
/// On disk a record is `key` (4 bytes, signed little-endian) followed by
/// the payload element count (4 bytes, unsigned little-endian) followed by
/// that many 4-byte unsigned little-endian integers. No padding, no
/// per-element prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Sort key; not required to be unique across records
    pub key: i32,
    /// Payload elements, at most [`MAX_PAYLOAD_ELEMENTS`]
    pub payload: Vec<u32>,
}

impl Record {
    /// Create a record, enforcing the payload bound.
    pub fn new(key: i32, payload: Vec<u32>) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_ELEMENTS as usize {
            return Err(Error::PayloadTooLarge {
                declared: payload.len() as u32,
                max: MAX_PAYLOAD_ELEMENTS,
            });
        }
        Ok(Self { key, payload })
    }

    /// Read one record from a stream.
    ///
    /// Reads exactly 8 bytes of record header, then exactly
    /// `payload_length * 4` bytes of payload. Running out of bytes at any
    /// stage is [`Error::TruncatedInput`]; a declared length over
    /// [`MAX_PAYLOAD_ELEMENTS`] is [`Error::PayloadTooLarge`].
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let key = reader
            .read_i32::<LittleEndian>()
            .map_err(|e| Error::on_read(e, "record key"))?;
        let payload_length = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| Error::on_read(e, "payload length"))?;

        if payload_length > MAX_PAYLOAD_ELEMENTS {
            return Err(Error::PayloadTooLarge {
                declared: payload_length,
                max: MAX_PAYLOAD_ELEMENTS,
            });
        }

        // The length comes from the file, so the allocation is checked
        // rather than assumed.
        let mut payload = Vec::new();
        payload
            .try_reserve_exact(payload_length as usize)
            .map_err(|_| Error::OutOfMemory {
                elements: payload_length as usize,
            })?;
        for _ in 0..payload_length {
            payload.push(
                reader
                    .read_u32::<LittleEndian>()
                    .map_err(|e| Error::on_read(e, "record payload"))?,
            );
        }

        Ok(Self { key, payload })
    }

    /// Write this record to a stream in the canonical layout.
    ///
    /// Returns the number of bytes written, which is always
    /// [`encoded_len`](Self::encoded_len). A sink that stops accepting
    /// bytes surfaces as [`Error::ShortWrite`].
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<usize> {
        writer
            .write_i32::<LittleEndian>(self.key)
            .map_err(|e| Error::on_write(e, "record key"))?;
        writer
            .write_u32::<LittleEndian>(self.payload.len() as u32)
            .map_err(|e| Error::on_write(e, "payload length"))?;
        for &element in &self.payload {
            writer
                .write_u32::<LittleEndian>(element)
                .map_err(|e| Error::on_write(e, "record payload"))?;
        }
        Ok(self.encoded_len())
    }

    /// Encoded size in bytes: 8-byte record header plus 4 bytes per
    /// payload element.
    pub fn encoded_len(&self) -> usize {
        8 + 4 * self.payload.len()
    }
}
