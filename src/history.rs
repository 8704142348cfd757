//! Prediction history fixture and accuracy aggregation

use crate::stocks::{Horizon, Prediction};

/// A past prediction and its realized outcome. Display-only fixture.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: u32,
    pub ticker: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
    pub prediction: Prediction,
    pub horizon: Horizon,
    pub predicted_price: f64,
    pub actual_price: f64,
    pub date: &'static str,
    pub time: &'static str,
    pub correct: bool,
    pub confidence: u8,
    pub outcome: &'static str,
}

/// The accuracy summary covers at most this many recent entries
pub const ACCURACY_WINDOW: usize = 30;

/// Percentage of correct predictions over the recent window, rounded to the
/// nearest integer. Empty windows report zero.
pub fn accuracy_rate(history: &[HistoryEntry]) -> u32 {
    let window = &history[..history.len().min(ACCURACY_WINDOW)];
    if window.is_empty() {
        return 0;
    }
    let correct = window.iter().filter(|e| e.correct).count();
    (correct as f64 / window.len() as f64 * 100.0).round() as u32
}

/// Correct count over the recent window
pub fn correct_count(history: &[HistoryEntry]) -> usize {
    history[..history.len().min(ACCURACY_WINDOW)]
        .iter()
        .filter(|e| e.correct)
        .count()
}

/// Fixture history, newest first
pub fn entries() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry { id: 1, ticker: "AAPL", country: "US", flag: "🇺🇸", prediction: Prediction::Buy, horizon: Horizon::Daily, predicted_price: 175.00, actual_price: 178.43, date: "2024-01-15", time: "14:30", correct: true, confidence: 87, outcome: "+$3.43 (+1.96%)" },
        HistoryEntry { id: 2, ticker: "TSLA", country: "US", flag: "🇺🇸", prediction: Prediction::Sell, horizon: Horizon::Hourly, predicted_price: 240.00, actual_price: 235.67, date: "2024-01-15", time: "11:15", correct: true, confidence: 81, outcome: "-$4.33 (-1.80%)" },
        HistoryEntry { id: 3, ticker: "GOOGL", country: "US", flag: "🇺🇸", prediction: Prediction::Hold, horizon: Horizon::Daily, predicted_price: 138.00, actual_price: 139.21, date: "2024-01-14", time: "09:45", correct: true, confidence: 73, outcome: "+$1.21 (+0.88%)" },
        HistoryEntry { id: 4, ticker: "MSFT", country: "US", flag: "🇺🇸", prediction: Prediction::Buy, horizon: Horizon::Daily, predicted_price: 350.00, actual_price: 344.73, date: "2024-01-14", time: "13:20", correct: false, confidence: 92, outcome: "-$5.27 (-1.51%)" },
        HistoryEntry { id: 5, ticker: "NVDA", country: "US", flag: "🇺🇸", prediction: Prediction::Buy, horizon: Horizon::Hourly, predicted_price: 420.00, actual_price: 432.18, date: "2024-01-13", time: "16:10", correct: true, confidence: 95, outcome: "+$12.18 (+2.90%)" },
        HistoryEntry { id: 6, ticker: "META", country: "US", flag: "🇺🇸", prediction: Prediction::Sell, horizon: Horizon::Daily, predicted_price: 290.00, actual_price: 294.82, date: "2024-01-13", time: "10:35", correct: false, confidence: 68, outcome: "+$4.82 (+1.66%)" },
    ]
}
