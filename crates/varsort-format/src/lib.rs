//! # varsort-format
//!
//! Codec, reader, writer, and sorter for keyed variable-length record
//! files: flat binary files holding a count-prefixed stream of records,
//! each a signed 32-bit key followed by a variable number of unsigned
//! 32-bit payload elements.
//!
//! ## File layout
//!
//! ```text
//! u32 record count N            (little-endian)
//! N times:
//!     i32 key                   (little-endian)
//!     u32 payload_length L      (little-endian, L <= 512)
//!     L   u32 payload elements  (little-endian)
//! ```
//!
//! No magic number, no version field, no checksum. The count header is
//! the only validation handle: a file with fewer records than it declares
//! fails with [`Error::TruncatedInput`].
//!
//! ## Quick start
//!
//! ```rust
//! use varsort_format::{Record, read_records_from, sort_records, write_records_to};
//!
//! let mut records = vec![
//!     Record::new(9, vec![1, 2])?,
//!     Record::new(2, vec![7])?,
//! ];
//! sort_records(&mut records);
//!
//! let mut buffer = Vec::new();
//! write_records_to(&mut buffer, &records)?;
//!
//! let read_back = read_records_from(&mut std::io::Cursor::new(buffer))?;
//! assert_eq!(read_back[0].key, 2);
//! # Ok::<(), varsort_format::Error>(())
//! ```

pub mod error;
pub mod reader;
pub mod record;
pub mod sort;
pub mod writer;

pub use error::{Error, Result};
pub use reader::{read_records, read_records_from};
pub use record::{MAX_PAYLOAD_ELEMENTS, Record};
pub use sort::sort_records;
pub use writer::{write_records, write_records_to};
