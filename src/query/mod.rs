//! Query engine: filter, search, rank and annotate foods.

pub mod annotate;
pub mod filter;
pub mod sort;

pub use annotate::{AnnotatedFood, Annotator};
pub use filter::{
    filter_by_category, matches_query, normalize_query, search, SearchOutcome, MIN_QUERY_CHARS,
};
pub use sort::{sort_indices, sort_key, sort_results};

use crate::core::{FoodId, FoodRecord};
use crate::view::SortMode;

/// Sort `ids` by `mode` and annotate them for display
pub fn rank<'a>(
    records: &'a [FoodRecord],
    ids: Vec<FoodId>,
    mode: SortMode,
    annotator: &Annotator<'a>,
) -> Vec<AnnotatedFood<'a>> {
    let ids = sort_results(records, ids, mode);
    annotator.annotate_all(records, &ids, mode)
}
