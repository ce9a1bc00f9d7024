//! Browser session: active screen, per-screen modes, pins and settings.
//!
//! Every call to [`Browser::refresh`] recomputes the active screen from the
//! current state. Nothing is cached between refreshes, so repeating a refresh
//! is always safe.

use crate::config::{SettingsManager, SettingsStore, TaxonomyConfig};
use crate::core::{Error, FoodId, Result};
use crate::dataset::Catalog;
use crate::query::{filter_by_category, rank, search, AnnotatedFood, Annotator, SearchOutcome};
use crate::scoring::{ColorThresholds, ThresholdScheme};
use crate::selection::{PinSet, PinToggle};
use crate::taxonomy::{CategoryEntry, Taxonomy};
use crate::view::detail::FoodDetail;
use crate::view::{Screen, SortMode, ViewState};

/// Pinned foods, shown on every screen regardless of filters
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub items: Vec<AnnotatedFood<'a>>,
    pub capacity: usize,
}

/// Search screen body
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<'a> {
    TooShort,
    Matches(Vec<AnnotatedFood<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent<'a> {
    Home {
        food_count: usize,
        category_count: usize,
    },
    Search {
        query: String,
        description: &'static str,
        results: SearchResults<'a>,
    },
    Categories {
        categories: &'a [CategoryEntry],
    },
    CategoryFoods {
        category: String,
        results: Vec<AnnotatedFood<'a>>,
    },
    FoodDetail(FoodDetail<'a>),
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView<'a> {
    pub screen: Screen,
    /// Mode of the active screen, `None` for screens without one
    pub mode: Option<SortMode>,
    pub content: ScreenContent<'a>,
    pub comparison: Comparison<'a>,
}

#[derive(Debug)]
pub struct Browser<S: SettingsStore> {
    catalog: Catalog,
    taxonomy: Taxonomy,
    settings: SettingsManager<S>,
    view: ViewState,
    pins: PinSet,
    screen: Screen,
    search_query: String,
    category: Option<String>,
    food: Option<FoodId>,
}

impl<S: SettingsStore> Browser<S> {
    pub fn new(catalog: Catalog, taxonomy_config: &TaxonomyConfig, settings: SettingsManager<S>) -> Self {
        let taxonomy = Taxonomy::new(
            catalog.records(),
            &taxonomy_config.priority,
            taxonomy_config.forced_last.as_deref(),
        );
        let persisted = settings.settings();
        let view = ViewState::from_persisted(persisted.search_sort_mode, persisted.detail_view_mode);
        Self {
            catalog,
            taxonomy,
            settings,
            view,
            pins: PinSet::new(),
            screen: Screen::Home,
            search_query: String::new(),
            category: None,
            food: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &SettingsManager<S> {
        &self.settings
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn show_search(&mut self) {
        self.screen = Screen::Search;
    }

    /// Replace the search text and switch to the search screen
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.screen = Screen::Search;
    }

    pub fn show_categories(&mut self) {
        self.screen = Screen::Categories;
    }

    pub fn show_category(&mut self, category: &str) -> Result<()> {
        if !self.taxonomy.contains(category) {
            return Err(Error::UnknownCategory(category.to_string()));
        }
        self.category = Some(category.to_string());
        self.screen = Screen::CategoryFoods;
        Ok(())
    }

    /// Open a food. The detail mode is taken from the screen being left.
    pub fn show_food(&mut self, id: FoodId) -> Result<()> {
        self.catalog.require(id)?;
        self.view.inherit_detail_mode(self.screen);
        self.food = Some(id);
        self.screen = Screen::FoodDetail;
        Ok(())
    }

    /// Change one screen's mode. Search and detail modes are persisted
    /// first; if that write fails the session mode is left as it was.
    ///
    /// Returns true when the active screen has to be refreshed: the mode
    /// actually changed and `screen` is the one showing.
    pub fn set_mode(&mut self, screen: Screen, mode: SortMode) -> Result<bool> {
        match screen {
            Screen::Search => self.settings.set_search_sort_mode(mode)?,
            Screen::FoodDetail => self.settings.set_detail_view_mode(mode)?,
            Screen::Home | Screen::Categories | Screen::CategoryFoods => {}
        }
        Ok(self.set_session_mode(screen, mode))
    }

    /// Like [`Browser::set_mode`] but only for this session; nothing is
    /// persisted.
    pub fn set_session_mode(&mut self, screen: Screen, mode: SortMode) -> bool {
        self.view.set_mode(screen, mode) && screen == self.screen
    }

    pub fn toggle_pin(&mut self, id: FoodId) -> Result<PinToggle> {
        self.catalog.require(id)?;
        Ok(self.pins.toggle(id)?)
    }

    pub fn clear_pins(&mut self) {
        self.pins.clear();
    }

    pub fn set_color_thresholds(
        &mut self,
        scheme: ThresholdScheme,
        thresholds: ColorThresholds,
    ) -> Result<()> {
        self.settings.set_color_thresholds(scheme, thresholds)
    }

    /// Recompute the active screen
    pub fn refresh(&self) -> ScreenView<'_> {
        let records = self.catalog.records();
        let settings = self.settings.settings();
        let annotator = Annotator::new(self.catalog.scale(), settings, &self.pins);
        let mode = self.view.mode_for(self.screen);

        let content = match self.screen {
            Screen::Home => ScreenContent::Home {
                food_count: self.catalog.len(),
                category_count: self.taxonomy.len(),
            },
            Screen::Search => {
                let mode = self.view.search_sort;
                let results = match search(records, &self.search_query) {
                    SearchOutcome::TooShort => SearchResults::TooShort,
                    SearchOutcome::Matches(ids) => {
                        SearchResults::Matches(rank(records, ids, mode, &annotator))
                    }
                };
                ScreenContent::Search {
                    query: self.search_query.clone(),
                    description: mode.search_description(),
                    results,
                }
            }
            Screen::Categories => ScreenContent::Categories {
                categories: self.taxonomy.entries(),
            },
            Screen::CategoryFoods => {
                let category = self.category.clone().unwrap_or_default();
                let ids = filter_by_category(records, &category);
                ScreenContent::CategoryFoods {
                    results: rank(records, ids, self.view.category_sort, &annotator),
                    category,
                }
            }
            Screen::FoodDetail => match self.food.and_then(|id| records.get(id).map(|r| (id, r))) {
                Some((id, record)) => ScreenContent::FoodDetail(FoodDetail::build(
                    id,
                    record,
                    self.view.detail_mode,
                    settings,
                    self.pins.contains(id),
                )),
                None => ScreenContent::Home {
                    food_count: self.catalog.len(),
                    category_count: self.taxonomy.len(),
                },
            },
        };

        // Pins keep their insertion order and use the active mode, or the
        // search mode on screens without one.
        let comparison_mode = mode.unwrap_or(self.view.search_sort);
        let comparison = Comparison {
            items: annotator.annotate_all(records, self.pins.ids(), comparison_mode),
            capacity: self.pins.capacity(),
        };

        ScreenView {
            screen: self.screen,
            mode,
            content,
            comparison,
        }
    }
}
