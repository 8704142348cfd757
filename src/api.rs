//! Client for the TrendCast backend connector
//!
//! Typed bindings for the four generated data-access operations (create
//! user, stock lookup, watchlist add/list). This is a stable contract to a
//! hosted service that is out of scope here; none of the interactive flows
//! call it.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client for the backend connector
pub struct DataConnectClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DataConnectClient {
    /// Create a new client with the default localhost URL
    pub fn new() -> Self {
        Self::with_url("http://localhost:9399".to_string())
    }

    /// Create a new client with a custom base URL
    pub fn with_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Register a user and return their key
    pub fn create_user(&self, vars: &CreateUserVariables) -> Result<UserKey, ApiError> {
        let data: CreateUserData = self.execute("CreateUser", vars)?;
        Ok(data.user_insert)
    }

    /// Look up stocks by ticker symbol
    pub fn get_stock_by_ticker(&self, ticker_symbol: &str) -> Result<Vec<StockRecord>, ApiError> {
        let data: GetStockByTickerData = self.execute(
            "GetStockByTicker",
            &GetStockByTickerVariables {
                ticker_symbol: ticker_symbol.to_string(),
            },
        )?;
        Ok(data.stocks)
    }

    /// Add a stock to the current user's watchlist
    pub fn add_to_watchlist(
        &self,
        stock_id: Uuid,
        notes: Option<String>,
    ) -> Result<WatchlistItemKey, ApiError> {
        let data: AddToWatchlistData =
            self.execute("AddToWatchlist", &AddToWatchlistVariables { stock_id, notes })?;
        Ok(data.watchlist_item_insert)
    }

    /// Fetch the current user's watchlist with embedded stock summaries
    pub fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, ApiError> {
        let data: GetWatchlistData = self.execute("GetWatchlist", &serde_json::json!({}))?;
        Ok(data.watchlist_items)
    }

    fn execute<V: Serialize, D: for<'de> Deserialize<'de>>(
        &self,
        operation: &str,
        variables: &V,
    ) -> Result<D, ApiError> {
        let url = format!("{}/operations/{}", self.base_url, operation);
        let response = self
            .client
            .post(&url)
            .json(variables)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for DataConnectClient {
    fn default() -> Self {
        Self::new()
    }
}

/// API error types
#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Operation variables and payloads (mirror the generated connector contract)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserVariables {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub user_insert: UserKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKey {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStockByTickerVariables {
    pub ticker_symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetStockByTickerData {
    pub stocks: Vec<StockRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: Uuid,
    pub company_name: String,
    pub ticker_symbol: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWatchlistVariables {
    pub stock_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWatchlistData {
    pub watchlist_item_insert: WatchlistItemKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItemKey {
    pub user_id: Uuid,
    pub stock_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWatchlistData {
    pub watchlist_items: Vec<WatchlistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub stock: WatchlistStockSummary,
    #[serde(default)]
    pub notes: Option<String>,
    pub added_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStockSummary {
    pub id: Uuid,
    pub ticker_symbol: String,
    pub company_name: String,
}
