use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::models::{StopLossType, TradeCategory, TradeDirection, TradeForm};

/// A complete long setup: entry 100-120, target 140-160, stop 95.
pub fn sample_form() -> TradeForm {
    TradeForm {
        stock_name: "RELIANCE".to_string(),
        trade_direction: Some(TradeDirection::Buy),
        trade_category: Some(TradeCategory::Swing),
        min_entry: "100".to_string(),
        max_entry: "120".to_string(),
        current_market: "112".to_string(),
        min_target: "140".to_string(),
        max_target: "160".to_string(),
        stop_loss: "95".to_string(),
        stop_loss_type: Some(StopLossType::Fixed),
        ..Default::default()
    }
}

pub fn sample_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A per-process scratch directory so parallel test runs don't collide.
pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tradebook_test_{}_{}", name, std::process::id()))
}
