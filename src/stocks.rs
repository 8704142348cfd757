//! Stock catalog and list derivation
//!
//! Holds the fixture stock records served per market, the closed
//! prediction/horizon variants used throughout the app, and the
//! filter + sort pipeline behind the stock list view.

use std::cmp::Ordering;

/// Predicted signal for a stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Buy,
    Sell,
    Hold,
}

impl Prediction {
    pub fn label(&self) -> &'static str {
        match self {
            Prediction::Buy => "BUY",
            Prediction::Sell => "SELL",
            Prediction::Hold => "HOLD",
        }
    }

    /// One-line summary shown on the detail panel
    pub fn summary(&self) -> &'static str {
        match self {
            Prediction::Buy => "Strong buy signal detected",
            Prediction::Sell => "Consider selling position",
            Prediction::Hold => "Maintain current position",
        }
    }
}

/// Prediction time-frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizon {
    #[default]
    Daily,
    Hourly,
}

impl Horizon {
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Daily => "Daily",
            Horizon::Hourly => "Hourly",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Horizon::Daily => Horizon::Hourly,
            Horizon::Hourly => Horizon::Daily,
        }
    }
}

/// A single stock record. Immutable fixture data; prices are USD.
#[derive(Debug, Clone)]
pub struct Stock {
    pub ticker: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub prediction: Prediction,
    /// Daily (long-term) confidence, 0-100
    pub confidence: u8,
    /// Hourly (short-term) confidence, 0-100
    pub hourly_confidence: u8,
    pub volume: u64,
    pub sector: &'static str,
}

impl Stock {
    /// Confidence for the given horizon
    pub fn confidence_for(&self, horizon: Horizon) -> u8 {
        match horizon {
            Horizon::Daily => self.confidence,
            Horizon::Hourly => self.hourly_confidence,
        }
    }
}

/// Sort key for the stock list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Confidence,
    Performance,
    Volume,
    Alphabetical,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Confidence => "Confidence",
            SortKey::Performance => "Performance",
            SortKey::Volume => "Volume",
            SortKey::Alphabetical => "Alphabetical",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortKey::Confidence => SortKey::Performance,
            SortKey::Performance => SortKey::Volume,
            SortKey::Volume => SortKey::Alphabetical,
            SortKey::Alphabetical => SortKey::Confidence,
        }
    }
}

/// Prediction filter for the stock list, with an `All` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionFilter {
    #[default]
    All,
    Only(Prediction),
}

impl PredictionFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PredictionFilter::All => "All",
            PredictionFilter::Only(p) => p.label(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PredictionFilter::All => PredictionFilter::Only(Prediction::Buy),
            PredictionFilter::Only(Prediction::Buy) => PredictionFilter::Only(Prediction::Sell),
            PredictionFilter::Only(Prediction::Sell) => PredictionFilter::Only(Prediction::Hold),
            PredictionFilter::Only(Prediction::Hold) => PredictionFilter::All,
        }
    }

    fn matches(&self, prediction: Prediction) -> bool {
        match self {
            PredictionFilter::All => true,
            PredictionFilter::Only(p) => *p == prediction,
        }
    }
}

/// Retain stocks matching `query` (case-insensitive, ticker or name) and
/// `filter`, then order by `sort`. Confidence and the horizon selector only
/// interact for the confidence sort; ties keep fixture order (stable sort).
pub fn filter_and_sort(
    stocks: &[Stock],
    query: &str,
    filter: PredictionFilter,
    sort: SortKey,
    horizon: Horizon,
) -> Vec<Stock> {
    let needle = query.to_lowercase();
    let mut out: Vec<Stock> = stocks
        .iter()
        .filter(|s| {
            let matches_search = s.ticker.to_lowercase().contains(&needle)
                || s.name.to_lowercase().contains(&needle);
            matches_search && filter.matches(s.prediction)
        })
        .cloned()
        .collect();

    out.sort_by(|a, b| match sort {
        SortKey::Confidence => b.confidence_for(horizon).cmp(&a.confidence_for(horizon)),
        SortKey::Performance => b
            .change_percent
            .partial_cmp(&a.change_percent)
            .unwrap_or(Ordering::Equal),
        SortKey::Volume => b.volume.cmp(&a.volume),
        SortKey::Alphabetical => a.ticker.cmp(b.ticker),
    });

    out
}

/// Fixture catalog served for every market in the demo
pub fn catalog() -> Vec<Stock> {
    vec![
        Stock { ticker: "AAPL", name: "Apple Inc.", price: 175.43, change: 2.34, change_percent: 1.35, prediction: Prediction::Buy, confidence: 87, hourly_confidence: 72, volume: 52_847_392, sector: "Technology" },
        Stock { ticker: "GOOGL", name: "Alphabet Inc.", price: 138.21, change: -1.23, change_percent: -0.88, prediction: Prediction::Hold, confidence: 73, hourly_confidence: 68, volume: 28_472_618, sector: "Technology" },
        Stock { ticker: "MSFT", name: "Microsoft Corp.", price: 344.73, change: 5.67, change_percent: 1.67, prediction: Prediction::Buy, confidence: 92, hourly_confidence: 85, volume: 31_847_295, sector: "Technology" },
        Stock { ticker: "TSLA", name: "Tesla Inc.", price: 238.45, change: -8.21, change_percent: -3.33, prediction: Prediction::Sell, confidence: 81, hourly_confidence: 89, volume: 89_472_615, sector: "Automotive" },
        Stock { ticker: "AMZN", name: "Amazon.com Inc.", price: 127.74, change: 0.95, change_percent: 0.75, prediction: Prediction::Hold, confidence: 65, hourly_confidence: 58, volume: 45_738_291, sector: "E-commerce" },
        Stock { ticker: "NVDA", name: "NVIDIA Corp.", price: 421.13, change: 12.45, change_percent: 3.05, prediction: Prediction::Buy, confidence: 95, hourly_confidence: 91, volume: 67_391_847, sector: "Technology" },
        Stock { ticker: "META", name: "Meta Platforms Inc.", price: 284.27, change: -3.52, change_percent: -1.22, prediction: Prediction::Hold, confidence: 68, hourly_confidence: 75, volume: 23_847_192, sector: "Technology" },
        Stock { ticker: "NFLX", name: "Netflix Inc.", price: 392.65, change: 7.83, change_percent: 2.03, prediction: Prediction::Buy, confidence: 79, hourly_confidence: 83, volume: 18_472_935, sector: "Entertainment" },
    ]
}

/// Static reasons shown alongside the prediction on the detail panel
pub const PREDICTION_REASONS: [&str; 3] = [
    "Strong earnings growth",
    "High trading volume",
    "Positive market sentiment",
];
