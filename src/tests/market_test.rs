//! Unit tests for the country fixture and market search

use crate::market::*;

#[test]
fn test_empty_query_returns_every_market() {
    let all = countries();
    assert_eq!(search(&all, "").len(), all.len());
}

#[test]
fn test_search_matches_name_case_insensitively() {
    let result = search(&countries(), "JAPAN");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].code, "JP");
}

#[test]
fn test_search_matches_code_case_insensitively() {
    let result = search(&countries(), "kr");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "South Korea");
}

#[test]
fn test_search_matches_partial_name() {
    let result = search(&countries(), "united");
    let names: Vec<&str> = result.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["United States", "United Kingdom"]);
}

#[test]
fn test_search_no_match_returns_empty() {
    assert!(search(&countries(), "zz").is_empty());
}
