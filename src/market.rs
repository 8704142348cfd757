//! Country/market model and fixture for the market-selection screen

/// Direction of a market's recent performance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketTrend {
    Up,
    Down,
    Neutral,
}

impl MarketTrend {
    /// Glyph shown next to the performance figure
    pub fn glyph(&self) -> &'static str {
        match self {
            MarketTrend::Up => "▲",
            MarketTrend::Down => "▼",
            MarketTrend::Neutral => "─",
        }
    }
}

/// A selectable country/market. Immutable fixture.
#[derive(Debug, Clone)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub trend: MarketTrend,
    pub performance: &'static str,
    pub markets: u32,
}

/// Countries offered on the market-selection screen
pub fn countries() -> Vec<Country> {
    vec![
        Country { code: "US", name: "United States", flag: "🇺🇸", trend: MarketTrend::Up, performance: "+2.4%", markets: 1247 },
        Country { code: "GB", name: "United Kingdom", flag: "🇬🇧", trend: MarketTrend::Up, performance: "+1.8%", markets: 892 },
        Country { code: "DE", name: "Germany", flag: "🇩🇪", trend: MarketTrend::Down, performance: "-0.7%", markets: 634 },
        Country { code: "JP", name: "Japan", flag: "🇯🇵", trend: MarketTrend::Up, performance: "+3.2%", markets: 1156 },
        Country { code: "CN", name: "China", flag: "🇨🇳", trend: MarketTrend::Neutral, performance: "0.0%", markets: 934 },
        Country { code: "CA", name: "Canada", flag: "🇨🇦", trend: MarketTrend::Up, performance: "+1.2%", markets: 445 },
        Country { code: "AU", name: "Australia", flag: "🇦🇺", trend: MarketTrend::Down, performance: "-1.1%", markets: 323 },
        Country { code: "FR", name: "France", flag: "🇫🇷", trend: MarketTrend::Up, performance: "+0.9%", markets: 512 },
        Country { code: "IN", name: "India", flag: "🇮🇳", trend: MarketTrend::Up, performance: "+4.1%", markets: 867 },
        Country { code: "KR", name: "South Korea", flag: "🇰🇷", trend: MarketTrend::Neutral, performance: "-0.2%", markets: 289 },
        Country { code: "BR", name: "Brazil", flag: "🇧🇷", trend: MarketTrend::Down, performance: "-2.3%", markets: 178 },
        Country { code: "MX", name: "Mexico", flag: "🇲🇽", trend: MarketTrend::Up, performance: "+1.5%", markets: 134 },
    ]
}

/// Case-insensitive country search over name and code
pub fn search(countries: &[Country], query: &str) -> Vec<Country> {
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
