use serde::{Deserialize, Serialize};

use crate::models::{parse_price, TradeForm};

/// Body of `POST /api/trades`. Field names and order are what the backend
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub stock_search: String,
    pub trade_direction: String,
    pub trade_category: String,
    pub min_entry_price: Option<f64>,
    pub max_entry_price: Option<f64>,
    pub current_market_price: Option<f64>,
    pub min_target_price: Option<f64>,
    pub max_target_price: Option<f64>,
    pub stop_loss_price: Option<f64>,
    #[serde(rename = "stoplossType")]
    pub stoploss_type: String,
    pub book_profit_price: Option<f64>,
    pub notes: String,
    pub is_risky_trade: bool,
}

impl From<&TradeForm> for SubmissionPayload {
    fn from(form: &TradeForm) -> Self {
        Self {
            stock_search: form.stock_name.clone(),
            trade_direction: form.trade_direction.map(|d| d.to_string()).unwrap_or_default(),
            trade_category: form.trade_category.map(|c| c.to_string()).unwrap_or_default(),
            min_entry_price: number(&form.min_entry),
            max_entry_price: number(&form.max_entry),
            current_market_price: number(&form.current_market),
            min_target_price: number(&form.min_target),
            max_target_price: number(&form.max_target),
            stop_loss_price: number(&form.stop_loss),
            stoploss_type: form.stop_loss_type.map(|t| t.to_string()).unwrap_or_default(),
            book_profit_price: number(&form.book_profit),
            notes: form.notes.clone(),
            is_risky_trade: form.risky_trade,
        }
    }
}

/// Blank text goes out as `0`, anything unparseable as `null`.
fn number(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        Some(0.0)
    } else {
        parse_price(raw)
    }
}
