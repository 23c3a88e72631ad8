//! In-place ordering of record collections by key

use crate::record::Record;
use tracing::debug;

/// Sort `records` by key, ascending.
///
/// Uses an unstable sort, so records with equal keys may end up in any
/// relative order. Payloads are not copied; only the records themselves
/// move. Empty and single-record collections are no-ops.
pub fn sort_records(records: &mut [Record]) {
    records.sort_unstable_by_key(|record| record.key);
    debug!("sorted {} records", records.len());
}
