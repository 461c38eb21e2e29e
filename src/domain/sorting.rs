use crate::domain::models::{RankedEntry, SortKey};

/// Return a copy of `entries` ordered ascending by `key`.
/// Equal keys keep their input order.
pub fn sorted_by(entries: &[RankedEntry], key: SortKey) -> Vec<RankedEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| key.value_of(entry));
    sorted
}
