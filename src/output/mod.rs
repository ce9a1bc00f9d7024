//! Rendering for the terminal binary.

pub mod terminal;

pub use terminal::{
    render_bar, render_categories, render_comparison, render_detail, render_rows, render_screen,
    render_settings, write_output,
};
