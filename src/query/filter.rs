//! Category filter and free-text search.

use crate::core::{FoodId, FoodRecord};

/// Shortest query, in characters, that is searched
pub const MIN_QUERY_CHARS: usize = 2;

/// Ids of every record in `category` (exact match), in dataset order
pub fn filter_by_category(records: &[FoodRecord], category: &str) -> Vec<FoodId> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.category == category)
        .map(|(id, _)| id)
        .collect()
}

/// Result of a search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was shorter than [`MIN_QUERY_CHARS`] after trimming.
    /// Distinct from a search with no matches.
    TooShort,
    /// Matching ids in dataset order; may be empty
    Matches(Vec<FoodId>),
}

impl SearchOutcome {
    pub fn is_too_short(&self) -> bool {
        matches!(self, SearchOutcome::TooShort)
    }

    /// Matching ids, empty for a too-short query
    pub fn ids(&self) -> &[FoodId] {
        match self {
            SearchOutcome::TooShort => &[],
            SearchOutcome::Matches(ids) => ids,
        }
    }
}

/// Lowercase and trim a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True if a normalized query is a substring of the name, category or
/// preparation
pub fn matches_query(record: &FoodRecord, normalized_query: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(normalized_query);
    hit(record.name.as_str())
        || hit(record.category.as_str())
        || record.preparation.as_deref().is_some_and(hit)
}

pub fn search(records: &[FoodRecord], query: &str) -> SearchOutcome {
    let query = normalize_query(query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::TooShort;
    }
    let ids = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, &query))
        .map(|(id, _)| id)
        .collect();
    SearchOutcome::Matches(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FoodRecord> {
        let mut kylling = FoodRecord::new("Kylling", "Fjærfe");
        kylling.preparation = Some("stekt".to_string());
        vec![
            FoodRecord::new("Banan", "Frukt"),
            kylling,
            FoodRecord::new("Andunge", "Fjærfe"),
        ]
    }

    #[test]
    fn test_search_matches_name_substrings() {
        assert_eq!(search(&sample(), "an"), SearchOutcome::Matches(vec![0, 2]));
    }

    #[test]
    fn test_search_matches_category_and_preparation() {
        assert_eq!(search(&sample(), "FJÆR"), SearchOutcome::Matches(vec![1, 2]));
        assert_eq!(search(&sample(), " stekt "), SearchOutcome::Matches(vec![1]));
    }

    #[test]
    fn test_short_query_is_distinct_from_no_match() {
        assert!(search(&sample(), " a ").is_too_short());
        assert!(search(&sample(), "").is_too_short());
        assert_eq!(search(&sample(), "zz"), SearchOutcome::Matches(vec![]));
    }

    #[test]
    fn test_query_length_counts_characters() {
        assert!(search(&sample(), "æ").is_too_short());
        assert!(!search(&sample(), "æø").is_too_short());
    }

    #[test]
    fn test_filter_by_category_is_exact() {
        let records = sample();
        assert_eq!(filter_by_category(&records, "Fjærfe"), vec![1, 2]);
        assert!(filter_by_category(&records, "fjærfe").is_empty());
    }
}
