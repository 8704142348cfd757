//! Unit tests for the stock catalog and its filter + sort pipeline

use crate::stocks::*;

fn tickers(stocks: &[Stock]) -> Vec<&'static str> {
    stocks.iter().map(|s| s.ticker).collect()
}

// ============================================================================
// FILTERING
// ============================================================================

#[test]
fn test_empty_query_returns_full_catalog() {
    let catalog = catalog();
    let result = filter_and_sort(
        &catalog,
        "",
        PredictionFilter::All,
        SortKey::Alphabetical,
        Horizon::Daily,
    );
    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_query_matches_ticker_case_insensitive() {
    let result = filter_and_sort(
        &catalog(),
        "aapl",
        PredictionFilter::All,
        SortKey::Confidence,
        Horizon::Daily,
    );
    assert_eq!(tickers(&result), vec!["AAPL"]);
}

#[test]
fn test_query_matches_name_case_insensitive() {
    let result = filter_and_sort(
        &catalog(),
        "MICRO",
        PredictionFilter::All,
        SortKey::Confidence,
        Horizon::Daily,
    );
    assert_eq!(tickers(&result), vec!["MSFT"]);
}

#[test]
fn test_every_result_contains_query() {
    let result = filter_and_sort(
        &catalog(),
        "inc",
        PredictionFilter::All,
        SortKey::Alphabetical,
        Horizon::Daily,
    );
    assert!(!result.is_empty());
    for stock in &result {
        let hay = format!("{} {}", stock.ticker, stock.name).to_lowercase();
        assert!(hay.contains("inc"), "{} does not match", stock.ticker);
    }
}

#[test]
fn test_no_match_returns_empty() {
    let result = filter_and_sort(
        &catalog(),
        "zzzz",
        PredictionFilter::All,
        SortKey::Confidence,
        Horizon::Daily,
    );
    assert!(result.is_empty());
}

#[test]
fn test_prediction_filter_buy_only() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::Only(Prediction::Buy),
        SortKey::Alphabetical,
        Horizon::Daily,
    );
    assert_eq!(tickers(&result), vec!["AAPL", "MSFT", "NFLX", "NVDA"]);
}

#[test]
fn test_prediction_filter_combines_with_query() {
    let result = filter_and_sort(
        &catalog(),
        "tesla",
        PredictionFilter::Only(Prediction::Buy),
        SortKey::Confidence,
        Horizon::Daily,
    );
    assert!(result.is_empty());
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn test_sort_confidence_daily_descending() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::All,
        SortKey::Confidence,
        Horizon::Daily,
    );
    let confidences: Vec<u8> = result.iter().map(|s| s.confidence).collect();
    let mut expected = confidences.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(confidences, expected);
    assert_eq!(result[0].ticker, "NVDA");
}

#[test]
fn test_sort_confidence_hourly_uses_hourly_field() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::All,
        SortKey::Confidence,
        Horizon::Hourly,
    );
    // NVDA 91, TSLA 89, MSFT 85, NFLX 83, META 75, AAPL 72, GOOGL 68, AMZN 58
    assert_eq!(
        tickers(&result),
        vec!["NVDA", "TSLA", "MSFT", "NFLX", "META", "AAPL", "GOOGL", "AMZN"]
    );
}

#[test]
fn test_sort_performance_descending() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::All,
        SortKey::Performance,
        Horizon::Daily,
    );
    assert_eq!(result[0].ticker, "NVDA"); // +3.05%
    assert_eq!(result.last().unwrap().ticker, "TSLA"); // -3.33%
}

#[test]
fn test_sort_volume_descending() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::All,
        SortKey::Volume,
        Horizon::Daily,
    );
    assert_eq!(result[0].ticker, "TSLA");
    assert_eq!(result.last().unwrap().ticker, "NFLX");
}

#[test]
fn test_sort_alphabetical_ascending() {
    let result = filter_and_sort(
        &catalog(),
        "",
        PredictionFilter::All,
        SortKey::Alphabetical,
        Horizon::Daily,
    );
    let mut expected = tickers(&result);
    expected.sort();
    assert_eq!(tickers(&result), expected);
}

// ============================================================================
// ENUM CYCLING
// ============================================================================

#[test]
fn test_sort_key_cycle_returns_to_start() {
    let start = SortKey::Confidence;
    assert_eq!(start.next().next().next().next(), start);
}

#[test]
fn test_prediction_filter_cycle_returns_to_all() {
    let mut filter = PredictionFilter::All;
    for _ in 0..4 {
        filter = filter.next();
    }
    assert_eq!(filter, PredictionFilter::All);
}

#[test]
fn test_horizon_toggle() {
    assert_eq!(Horizon::Daily.toggled(), Horizon::Hourly);
    assert_eq!(Horizon::Hourly.toggled(), Horizon::Daily);
}

#[test]
fn test_confidence_for_horizon() {
    let catalog = catalog();
    let aapl = catalog.iter().find(|s| s.ticker == "AAPL").unwrap();
    assert_eq!(aapl.confidence_for(Horizon::Daily), 87);
    assert_eq!(aapl.confidence_for(Horizon::Hourly), 72);
}
