//! Cosmetic color theme shared by the stopwatch and timer panels.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_COLOR: &str = "#ffffff";
const FALLBACK_SURFACE: &str = "#f0f0f0";
const FALLBACK_BORDER: &str = "#bdc3c7";

pub const PALETTE: [&str; 16] = [
    "#ffffff", "#f8f9fa", "#e9ecef", "#dee2e6",
    "#fff3cd", "#d1ecf1", "#d4edda", "#f8d7da",
    "#e2e3e5", "#ffeaa7", "#74b9ff", "#00b894",
    "#fd79a8", "#fdcb6e", "#6c5ce7", "#a29bfe",
];

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Slightly darker companion used for the display, lap list and inputs.
static SURFACE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("#ffffff", "#f8f9fa"),
        ("#f8f9fa", "#e9ecef"),
        ("#e9ecef", "#dee2e6"),
        ("#dee2e6", "#ced4da"),
        ("#fff3cd", "#ffeaa7"),
        ("#d1ecf1", "#b8daff"),
        ("#d4edda", "#b8e6b8"),
        ("#f8d7da", "#ffb3ba"),
        ("#e2e3e5", "#d3d3d4"),
        ("#ffeaa7", "#fdcb6e"),
        ("#74b9ff", "#0984e3"),
        ("#00b894", "#00a085"),
        ("#fd79a8", "#e84393"),
        ("#fdcb6e", "#e17055"),
        ("#6c5ce7", "#5f3dc4"),
        ("#a29bfe", "#6c5ce7"),
    ])
});

static BORDER_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("#ffffff", "#dee2e6"),
        ("#f8f9fa", "#ced4da"),
        ("#e9ecef", "#adb5bd"),
        ("#dee2e6", "#8a9497"),
        ("#fff3cd", "#f1c40f"),
        ("#d1ecf1", "#3498db"),
        ("#d4edda", "#27ae60"),
        ("#f8d7da", "#e74c3c"),
        ("#e2e3e5", "#95a5a6"),
        ("#ffeaa7", "#f39c12"),
        ("#74b9ff", "#2980b9"),
        ("#00b894", "#16a085"),
        ("#fd79a8", "#c0392b"),
        ("#fdcb6e", "#d35400"),
        ("#6c5ce7", "#8e44ad"),
        ("#a29bfe", "#9b59b6"),
    ])
});

/// Lowercase `#rrggbb` color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        HEX_COLOR_REGEX
            .is_match(trimmed)
            .then(|| Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn surface_for(color: &str) -> &'static str {
    SURFACE_COLORS
        .get(color.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(FALLBACK_SURFACE)
}

pub fn border_for(color: &str) -> &'static str {
    BORDER_COLORS
        .get(color.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(FALLBACK_BORDER)
}

/// Resolved colors for one background choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    pub color: ThemeColor,
}

impl Theme {
    pub fn new(color: ThemeColor) -> Self {
        Self { color }
    }

    pub fn surface(&self) -> &'static str {
        surface_for(self.color.as_str())
    }

    pub fn border(&self) -> &'static str {
        border_for(self.color.as_str())
    }

    /// Inline style for the stopwatch/timer containers.
    pub fn container_style(&self) -> String {
        format!("background-color: {};", self.color)
    }

    /// Inline style for clock displays and numeric inputs.
    pub fn display_style(&self) -> String {
        format!("background-color: {}; border-color: {};", self.surface(), self.border())
    }

    pub fn lap_list_style(&self) -> String {
        format!("background-color: {};", self.surface())
    }
}
