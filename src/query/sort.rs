//! Descending, stable ranking by the active mode's key.

use crate::core::{FoodId, FoodRecord};
use crate::scaling::serving_purines;
use crate::scoring::weighted_score;
use crate::view::SortMode;

/// Value a record is ranked by in `mode`
pub fn sort_key(record: &FoodRecord, mode: SortMode) -> f64 {
    match mode {
        SortMode::Total => record.total_purines(),
        SortMode::Serving => serving_purines(record),
        SortMode::Weighted => weighted_score(record),
    }
}

/// Sort ids by descending key. Ties keep their relative order.
/// Ids outside `records` rank last with a key of 0.
pub fn sort_indices(ids: &mut [FoodId], records: &[FoodRecord], mode: SortMode) {
    let key = |id: FoodId| records.get(id).map(|r| sort_key(r, mode)).unwrap_or(0.0);
    let mut keyed: Vec<(FoodId, f64)> = ids.iter().map(|&id| (id, key(id))).collect();
    // slice::sort_by is stable
    keyed.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    for (slot, (id, _)) in ids.iter_mut().zip(keyed) {
        *slot = id;
    }
}

pub fn sort_results(records: &[FoodRecord], mut ids: Vec<FoodId>, mode: SortMode) -> Vec<FoodId> {
    sort_indices(&mut ids, records, mode);
    ids
}
