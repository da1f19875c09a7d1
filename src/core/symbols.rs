/// NSE symbols offered by the stock picker.
pub const STOCK_SYMBOLS: [&str; 18] = [
    "RELIANCE",
    "TCS",
    "INFY",
    "HDFCBANK",
    "ICICIBANK",
    "WIPRO",
    "SBIN",
    "BAJFINANCE",
    "AXISBANK",
    "KOTAKBANK",
    "TATAMOTORS",
    "MARUTI",
    "ADANIENT",
    "SUNPHARMA",
    "NTPC",
    "POWERGRID",
    "ONGC",
    "COALINDIA",
];

/// Case-insensitive substring match over the catalogue, in catalogue order.
/// An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    STOCK_SYMBOLS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}

pub fn is_listed(symbol: &str) -> bool {
    STOCK_SYMBOLS.contains(&symbol)
}
