use anyhow::Result;

use crate::config::SettingsStore;
use crate::formatting::FormattingConfig;
use crate::output::terminal::render_screen;
use crate::view::{Browser, Screen, SortMode};

/// Which screen to render
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseTarget {
    Search {
        query: String,
        sort: Option<SortMode>,
    },
    Categories,
    Category {
        name: String,
        sort: Option<SortMode>,
    },
    Show {
        index: usize,
        mode: Option<SortMode>,
    },
}

/// Navigate to `target` with `pins` pinned and render the screen.
///
/// Mode flags apply to this run only. Pins that cannot be added are
/// reported on stderr and skipped.
pub fn browse<S: SettingsStore>(
    browser: &mut Browser<S>,
    target: BrowseTarget,
    pins: &[usize],
    fmt: &FormattingConfig,
) -> Result<String> {
    for &id in pins {
        if let Err(e) = browser.toggle_pin(id) {
            eprintln!("{}", fmt.warning(&e.to_string()));
        }
    }

    match target {
        BrowseTarget::Search { query, sort } => {
            browser.set_search_query(query);
            if let Some(mode) = sort {
                browser.set_session_mode(Screen::Search, mode);
            }
        }
        BrowseTarget::Categories => browser.show_categories(),
        BrowseTarget::Category { name, sort } => {
            browser.show_category(&name)?;
            if let Some(mode) = sort {
                browser.set_session_mode(Screen::CategoryFoods, mode);
            }
        }
        BrowseTarget::Show { index, mode } => {
            browser.show_food(index)?;
            if let Some(mode) = mode {
                browser.set_session_mode(Screen::FoodDetail, mode);
            }
        }
    }

    Ok(render_screen(&browser.refresh(), fmt))
}
