//! Category taxonomy: distinct categories in display order with counts.
//!
//! Order is: configured priority categories (those present, in list order),
//! then every remaining category alphabetically, then the forced-last
//! category if present.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::core::FoodRecord;

/// Build the ordered category list.
///
/// Every category present in `records` appears exactly once; nothing that
/// is absent from `records` appears.
pub fn build_taxonomy(
    records: &[FoodRecord],
    priority: &[String],
    forced_last: Option<&str>,
) -> Vec<String> {
    let mut remaining: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for name in priority {
        if Some(name.as_str()) == forced_last {
            continue;
        }
        if remaining.remove(name.as_str()) {
            ordered.push(name.clone());
        }
    }

    let last = forced_last.and_then(|name| remaining.take(name));
    ordered.extend(remaining.into_iter().map(str::to_string));
    ordered.extend(last.map(str::to_string));
    ordered
}

/// One taxonomy entry with the number of records in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub count: usize,
}

/// Ordered categories with per-category counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
}

impl Taxonomy {
    pub fn new(records: &[FoodRecord], priority: &[String], forced_last: Option<&str>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.category.as_str()).or_default() += 1;
        }
        let entries = build_taxonomy(records, priority, forced_last)
            .into_iter()
            .map(|name| {
                let count = counts.get(name.as_str()).copied().unwrap_or(0);
                CategoryEntry { name, count }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.name == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records(categories: &[&str]) -> Vec<FoodRecord> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| FoodRecord::new(format!("food {i}"), *c))
            .collect()
    }

    fn priority(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_priority_then_alphabetical_then_forced_last() {
        let data = records(&["Alkohol", "Brød", "Fisk", "Annet", "Fjærfe", "Fisk", "Ost"]);
        let order = build_taxonomy(&data, &priority(&["Fjærfe", "Fisk", "Kjøtt"]), Some("Alkohol"));
        assert_eq!(order, vec!["Fjærfe", "Fisk", "Annet", "Brød", "Ost", "Alkohol"]);
    }

    #[test]
    fn test_forced_last_absent_is_not_emitted() {
        let data = records(&["Fisk", "Brød"]);
        let order = build_taxonomy(&data, &[], Some("Alkohol"));
        assert_eq!(order, vec!["Brød", "Fisk"]);
    }

    #[test]
    fn test_forced_last_wins_over_priority() {
        let data = records(&["Alkohol", "Fisk"]);
        let order = build_taxonomy(&data, &priority(&["Alkohol", "Fisk"]), Some("Alkohol"));
        assert_eq!(order, vec!["Fisk", "Alkohol"]);
    }

    #[test]
    fn test_duplicate_priority_entries_emit_once() {
        let data = records(&["Fisk", "Fisk"]);
        let order = build_taxonomy(&data, &priority(&["Fisk", "Fisk"]), None);
        assert_eq!(order, vec!["Fisk"]);
    }

    #[test]
    fn test_taxonomy_counts() {
        let data = records(&["Fisk", "Brød", "Fisk"]);
        let taxonomy = Taxonomy::new(&data, &priority(&["Fisk"]), None);
        assert_eq!(
            taxonomy.entries(),
            &[
                CategoryEntry { name: "Fisk".into(), count: 2 },
                CategoryEntry { name: "Brød".into(), count: 1 },
            ]
        );
        assert!(taxonomy.contains("Brød"));
        assert!(!taxonomy.contains("Ost"));
    }
}
