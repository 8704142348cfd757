//! Theme configuration
//!
//! Dark and light palettes with consistent semantic colors for the
//! prediction terminal. Prediction and confidence-tier coloring route
//! through here so the list, detail, and history views stay in sync.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::metrics::ConfidenceTier;
use crate::stocks::Prediction;

/// Persisted theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Theme colors for the application
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub background: Color,
    pub panel_bg: Color,
    pub highlight_bg: Color,

    // Text hierarchy
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Chrome
    pub border: Color,
    pub accent: Color,

    // Semantic
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub info: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme optimized for financial data display
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 21, 28),
            panel_bg: Color::Rgb(24, 29, 38),
            highlight_bg: Color::Rgb(38, 46, 60),

            text: Color::Rgb(245, 246, 248),
            text_secondary: Color::Rgb(200, 205, 214),
            text_muted: Color::Rgb(132, 141, 158),

            border: Color::Rgb(54, 62, 78),
            accent: Color::Rgb(66, 150, 250),

            positive: Color::Rgb(46, 204, 113),
            negative: Color::Rgb(231, 76, 60),
            warning: Color::Rgb(241, 196, 15),
            info: Color::Rgb(93, 173, 226),
        }
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(246, 247, 249),
            panel_bg: Color::Rgb(255, 255, 255),
            highlight_bg: Color::Rgb(222, 229, 240),

            text: Color::Rgb(28, 33, 43),
            text_secondary: Color::Rgb(63, 72, 88),
            text_muted: Color::Rgb(112, 122, 140),

            border: Color::Rgb(198, 205, 217),
            accent: Color::Rgb(33, 110, 220),

            positive: Color::Rgb(27, 153, 86),
            negative: Color::Rgb(192, 57, 43),
            warning: Color::Rgb(190, 148, 5),
            info: Color::Rgb(41, 128, 185),
        }
    }

    /// Color for a prediction badge: green buy, red sell, yellow hold
    pub fn prediction_color(&self, prediction: Prediction) -> Color {
        match prediction {
            Prediction::Buy => self.positive,
            Prediction::Sell => self.negative,
            Prediction::Hold => self.warning,
        }
    }

    /// Color for a confidence tier, shared by rings, bars, and labels
    pub fn tier_color(&self, tier: ConfidenceTier) -> Color {
        match tier {
            ConfidenceTier::High => self.positive,
            ConfidenceTier::Medium => self.warning,
            ConfidenceTier::Low => self.negative,
        }
    }
}
