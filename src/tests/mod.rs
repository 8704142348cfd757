//! Test modules for TrendCast
//!
//! - `stocks_test` - catalog filter + sort pipeline
//! - `market_test` - country fixture and market search
//! - `currency_test` - static conversion table and price formatting
//! - `metrics_test` - confidence tiers, ring geometry, history accuracy
//! - `alerts_test` - alert registry and notification feed
//! - `navigation_test` - screen transitions and back precedence
//! - `settings_test` - theme preference persistence
//! - `app_test` - application state, timers, and end-to-end flows
//! - `api_test` - data-access boundary contract types

#[cfg(test)]
pub mod stocks_test;

#[cfg(test)]
pub mod market_test;

#[cfg(test)]
pub mod currency_test;

#[cfg(test)]
pub mod metrics_test;


#[cfg(test)]
pub mod navigation_test;


#[cfg(test)]
pub mod app_test;
