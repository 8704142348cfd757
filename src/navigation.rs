//! Screen identifiers and transition rules
//!
//! The navigator is deliberately permissive: there are no invalid-transition
//! errors, handlers simply never enter a screen whose context is missing
//! (stock detail without a selected stock, stock list without a market).

/// Every screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    MarketSelection,
    StockList,
    StockDetail,
    History,
    About,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::MarketSelection => "Select Market",
            Screen::StockList => "Stocks",
            Screen::StockDetail => "Stock Detail",
            Screen::History => "Prediction History",
            Screen::About => "About TrendCast",
        }
    }
}

/// Where "back" from History or About lands: the most specific prior
/// context wins (selected stock over selected market over home).
pub fn back_target(has_stock: bool, has_country: bool) -> Screen {
    if has_stock {
        Screen::StockDetail
    } else if has_country {
        Screen::StockList
    } else {
        Screen::MarketSelection
    }
}
