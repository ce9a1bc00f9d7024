use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::scoring::Level;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Honor NO_COLOR, CLICOLOR and CLICOLOR_FORCE
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }
        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Apply the choice to the `colored` crate globally
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }

    /// Paint text in the color of a level
    pub fn level(&self, text: &str, level: Level) -> String {
        if self.use_color() {
            text.color(level_color(level)).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_color() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.use_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn level_color(level: Level) -> Color {
    match level {
        Level::Low => Color::Green,
        Level::Moderate => Color::Yellow,
        Level::High => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Level::VeryHigh => Color::Red,
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
