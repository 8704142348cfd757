//! Unit tests for screen identifiers and back precedence

use crate::navigation::*;

#[test]
fn test_default_screen_is_login() {
    assert_eq!(Screen::default(), Screen::Login);
}

#[test]
fn test_back_prefers_stock_detail() {
    assert_eq!(back_target(true, true), Screen::StockDetail);
    // a selected stock wins even if the market selection was somehow cleared
    assert_eq!(back_target(true, false), Screen::StockDetail);
}

#[test]
fn test_back_falls_back_to_stock_list() {
    assert_eq!(back_target(false, true), Screen::StockList);
}

#[test]
fn test_back_defaults_to_market_selection() {
    assert_eq!(back_target(false, false), Screen::MarketSelection);
}

#[test]
fn test_screen_titles_are_distinct() {
    let screens = [
        Screen::Login,
        Screen::MarketSelection,
        Screen::StockList,
        Screen::StockDetail,
        Screen::History,
        Screen::About,
    ];
    for (i, a) in screens.iter().enumerate() {
        for b in &screens[i + 1..] {
            assert_ne!(a.title(), b.title());
        }
    }
}
