//! Derived display metrics
//!
//! Confidence tiering, confidence-ring geometry, and number formatting
//! shared by the list, detail, and history views.

use std::f64::consts::PI;

/// Ring radius used by the confidence indicator
const RING_RADIUS: f64 = 20.0;

/// Visual tier for a 0-100 confidence score.
///
/// The 80/60 boundaries drive color coding everywhere a confidence value is
/// shown; keep them in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High Confidence",
            ConfidenceTier::Medium => "Medium Confidence",
            ConfidenceTier::Low => "Low Confidence",
        }
    }
}

/// Tier for a confidence score: >= 80 high, 60-79 medium, < 60 low
pub fn confidence_tier(confidence: u8) -> ConfidenceTier {
    if confidence >= 80 {
        ConfidenceTier::High
    } else if confidence >= 60 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

/// Arc parameters for the circular confidence indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Arc length covered by the confidence value
    pub dash: f64,
    /// Full circumference of the ring
    pub circumference: f64,
}

impl RingGeometry {
    /// Filled fraction of the ring, in 0.0..=1.0
    pub fn proportion(&self) -> f64 {
        self.dash / self.circumference
    }
}

/// Map a 0-100 confidence linearly onto the ring's circumference
pub fn ring_geometry(confidence: u8) -> RingGeometry {
    let circumference = 2.0 * PI * RING_RADIUS;
    RingGeometry {
        dash: f64::from(confidence.min(100)) / 100.0 * circumference,
        circumference,
    }
}

/// Traded volume in millions, one decimal ("52.8M")
pub fn format_volume(volume: u64) -> String {
    format!("{:.1}M", volume as f64 / 1_000_000.0)
}

/// Signed change line: "+2.34 (+1.35%)"
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2} ({sign}{change_percent:.2}%)")
}
