pub mod metrics;
pub mod symbols;

pub use metrics::TradeMetrics;
