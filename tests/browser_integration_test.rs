mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

use common::{browser_with, load_catalog};
use purindb::config::{MemoryStore, SettingsManager, SettingsStore, TaxonomyConfig};
use purindb::core::{Error, FoodRecord};
use purindb::dataset::Catalog;
use purindb::scoring::Level;
use purindb::selection::{PinError, PinToggle};
use purindb::view::{Browser, Screen, ScreenContent, SearchResults, SortMode};

/// Settings store whose writes always fail
struct ReadOnlyStore;

impl SettingsStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&mut self, key: &str, _value: Value) -> purindb::Result<()> {
        Err(Error::Settings(format!("cannot write '{}'", key)))
    }

    fn clear(&mut self) -> purindb::Result<()> {
        Err(Error::Settings("cannot clear".to_string()))
    }
}

fn names(rows: &[purindb::AnnotatedFood<'_>]) -> Vec<String> {
    rows.iter().map(|row| row.record.name.clone()).collect()
}

#[test]
fn test_session_starts_on_home_with_counts() {
    let dir = TempDir::new().unwrap();
    let browser = browser_with(dir.path(), MemoryStore::new());
    let view = browser.refresh();

    assert_eq!(view.screen, Screen::Home);
    assert_eq!(view.mode, None);
    assert_eq!(
        view.content,
        ScreenContent::Home {
            food_count: 5,
            category_count: 4
        }
    );
    assert!(view.comparison.items.is_empty());
    assert_eq!(view.comparison.capacity, 5);
}

#[test]
fn test_categories_follow_priority_with_alcohol_last() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.show_categories();

    let ScreenContent::Categories { categories } = browser.refresh().content else {
        panic!("expected the category list");
    };
    let listed: Vec<(&str, usize)> = categories
        .iter()
        .map(|entry| (entry.name.as_str(), entry.count))
        .collect();
    assert_eq!(
        listed,
        vec![("Fisk", 1), ("Fjærfe", 2), ("Frukt", 1), ("Alkohol", 1)]
    );
}

#[test]
fn test_persisted_modes_seed_the_session() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::from_json(json!({
        "searchSortMode": "serving",
        "detailViewMode": "weighted"
    }));
    let browser = browser_with(dir.path(), store);

    let view = browser.view_state();
    assert_eq!(view.search_sort, SortMode::Serving);
    assert_eq!(view.detail_mode, SortMode::Weighted);
    assert_eq!(view.category_sort, SortMode::Total);
}

#[test]
fn test_screen_modes_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());

    browser.show_category("Fjærfe").unwrap();
    assert!(browser.set_mode(Screen::CategoryFoods, SortMode::Serving).unwrap());

    let view = browser.view_state();
    assert_eq!(view.category_sort, SortMode::Serving);
    assert_eq!(view.search_sort, SortMode::Total);
    assert_eq!(view.detail_mode, SortMode::Total);

    // Category mode is session-only
    assert_eq!(browser.settings().store().get("categorySortMode"), None);
    assert_eq!(browser.settings().store().get("searchSortMode"), None);
}

#[test]
fn test_set_mode_reports_refresh_only_for_active_change() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.set_search_query("fjær");

    assert!(browser.set_mode(Screen::Search, SortMode::Weighted).unwrap());
    assert!(!browser.set_mode(Screen::Search, SortMode::Weighted).unwrap());
    // Not the active screen
    assert!(!browser.set_mode(Screen::FoodDetail, SortMode::Serving).unwrap());

    assert_eq!(
        browser.settings().store().get("searchSortMode"),
        Some(json!("weighted"))
    );
    assert_eq!(
        browser.settings().store().get("detailViewMode"),
        Some(json!("serving"))
    );
}

#[test]
fn test_failed_mode_write_keeps_session_mode() {
    let dir = TempDir::new().unwrap();
    let mut browser = Browser::new(
        load_catalog(dir.path()),
        &TaxonomyConfig::default(),
        SettingsManager::load(ReadOnlyStore),
    );
    browser.set_search_query("fjær");

    let result = browser.set_mode(Screen::Search, SortMode::Serving);
    assert!(matches!(result, Err(Error::Settings(_))));
    assert_eq!(browser.view_state().search_sort, SortMode::Total);
    assert_eq!(browser.settings().settings().search_sort_mode, SortMode::Total);
    assert_eq!(browser.refresh().mode, Some(SortMode::Total));

    // Session-only modes never touch the store
    assert!(browser.set_mode(Screen::CategoryFoods, SortMode::Weighted).is_ok());
    assert_eq!(browser.view_state().category_sort, SortMode::Weighted);
}

#[test]
fn test_category_results_sorted_by_category_mode() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.show_category("Fjærfe").unwrap();

    let ScreenContent::CategoryFoods { results, .. } = browser.refresh().content else {
        panic!("expected category foods");
    };
    assert_eq!(names(&results), vec!["Kylling", "Andunge"]);

    browser.set_session_mode(Screen::CategoryFoods, SortMode::Weighted);
    let view = browser.refresh();
    assert_eq!(view.mode, Some(SortMode::Weighted));
    let ScreenContent::CategoryFoods { category, results } = view.content else {
        panic!("expected category foods");
    };
    assert_eq!(category, "Fjærfe");
    assert_eq!(names(&results), vec!["Andunge", "Kylling"]);
}

#[test]
fn test_unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    let result = browser.show_category("Godteri");
    assert!(matches!(result, Err(Error::UnknownCategory(ref name)) if name == "Godteri"));
    assert_eq!(browser.screen(), Screen::Home);
}

#[test]
fn test_detail_inherits_mode_from_origin_screen() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());

    browser.show_category("Fjærfe").unwrap();
    browser.set_session_mode(Screen::CategoryFoods, SortMode::Weighted);
    browser.show_food(2).unwrap();
    assert_eq!(browser.view_state().detail_mode, SortMode::Weighted);

    let ScreenContent::FoodDetail(detail) = browser.refresh().content else {
        panic!("expected the detail screen");
    };
    assert_eq!(detail.record.name, "Andunge");
    assert_eq!(detail.mode, SortMode::Weighted);
    assert!((detail.headline_value - 132.0).abs() < 1e-9);
    assert_eq!(detail.headline_level, Level::High);
    assert_eq!(detail.compounds.len(), 4);

    // Screens without a mode leave the detail mode alone
    browser.show_categories();
    browser.show_food(0).unwrap();
    assert_eq!(browser.view_state().detail_mode, SortMode::Weighted);
}

#[test]
fn test_detail_shows_overridden_beer_serving() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.show_food(3).unwrap();
    browser.set_session_mode(Screen::FoodDetail, SortMode::Serving);

    let ScreenContent::FoodDetail(detail) = browser.refresh().content else {
        panic!("expected the detail screen");
    };
    assert_eq!(detail.serving_grams, 500.0);
    assert!((detail.total_per_serving - 60.0).abs() < 1e-9);
    assert!((detail.headline_value - 60.0).abs() < 1e-9);
    assert_eq!(detail.headline_level, Level::Moderate);
}

#[test]
fn test_unknown_food_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    assert!(matches!(browser.show_food(42), Err(Error::UnknownFood(42))));
    assert!(matches!(browser.toggle_pin(42), Err(Error::UnknownFood(42))));
    assert!(browser.pins().is_empty());
}

#[test]
fn test_comparison_shown_when_search_is_too_short() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    assert_eq!(browser.toggle_pin(4).unwrap(), PinToggle::Pinned);
    assert_eq!(browser.toggle_pin(0).unwrap(), PinToggle::Pinned);

    browser.set_search_query("b");
    let view = browser.refresh();
    let ScreenContent::Search { results, .. } = &view.content else {
        panic!("expected the search screen");
    };
    assert_eq!(results, &SearchResults::TooShort);

    // Insertion order, not sort order
    assert_eq!(names(&view.comparison.items), vec!["Sardiner", "Banan"]);
    assert!(view.comparison.items.iter().all(|item| item.pinned));
}

#[test]
fn test_comparison_shown_for_empty_and_unmatched_searches() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.toggle_pin(3).unwrap();
    browser.toggle_pin(1).unwrap();

    browser.set_search_query("");
    let view = browser.refresh();
    let ScreenContent::Search { results, .. } = &view.content else {
        panic!("expected the search screen");
    };
    assert_eq!(results, &SearchResults::TooShort);
    assert_eq!(names(&view.comparison.items), vec!["Pils øl", "Kylling"]);

    browser.set_search_query("zz");
    let view = browser.refresh();
    let ScreenContent::Search { results, .. } = &view.content else {
        panic!("expected the search screen");
    };
    assert_eq!(results, &SearchResults::Matches(vec![]));
    assert_eq!(names(&view.comparison.items), vec!["Pils øl", "Kylling"]);
}

#[test]
fn test_comparison_uses_active_mode() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.toggle_pin(2).unwrap();
    browser.show_category("Fisk").unwrap();
    browser.set_session_mode(Screen::CategoryFoods, SortMode::Serving);

    let view = browser.refresh();
    // Andunge: 140 mg/100g at 200g
    assert!((view.comparison.items[0].display_value - 280.0).abs() < 1e-9);
}

#[test]
fn test_pin_capacity_is_enforced() {
    let records: Vec<FoodRecord> = (0..7)
        .map(|i| {
            let mut record = FoodRecord::new(format!("Mat {}", i), "Annet");
            record.total_purines = Some(10.0 * i as f64);
            record
        })
        .collect();
    let mut browser = Browser::new(
        Catalog::from_records(records),
        &TaxonomyConfig::default(),
        SettingsManager::load(MemoryStore::new()),
    );

    for id in 0..5 {
        browser.toggle_pin(id).unwrap();
    }
    let rejected = browser.toggle_pin(5);
    assert!(matches!(
        rejected,
        Err(Error::Pin(PinError::CapacityReached { capacity: 5 }))
    ));
    assert_eq!(browser.pins().ids(), &[0, 1, 2, 3, 4]);

    // Unpinning frees a slot
    assert_eq!(browser.toggle_pin(1).unwrap(), PinToggle::Unpinned);
    assert_eq!(browser.toggle_pin(6).unwrap(), PinToggle::Pinned);
    assert_eq!(browser.pins().ids(), &[0, 2, 3, 4, 6]);

    browser.clear_pins();
    assert!(browser.pins().is_empty());
}

#[test]
fn test_refresh_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let mut browser = browser_with(dir.path(), MemoryStore::new());
    browser.toggle_pin(1).unwrap();
    browser.set_search_query("an");

    let first = browser.refresh();
    let second = browser.refresh();
    assert_eq!(first, second);

    let ScreenContent::Search {
        results: SearchResults::Matches(rows),
        description,
        ..
    } = first.content
    else {
        panic!("expected search matches");
    };
    assert_eq!(names(&rows), vec!["Andunge", "Banan"]);
    assert_eq!(description, SortMode::Total.search_description());
}
