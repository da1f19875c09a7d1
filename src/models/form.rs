use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FormError;
use crate::models::{StopLossType, Tone, TradeCategory, TradeDirection};

/// Every editable field on the trade form, named by its form key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    StockName,
    TradeDirection,
    TradeCategory,
    MinEntry,
    MaxEntry,
    CurrentMarket,
    MinTarget,
    MaxTarget,
    StopLoss,
    StopLossType,
    BookProfit,
    Notes,
    RiskyTrade,
}

impl FormField {
    /// Fields that must be non-empty before a submit goes through.
    pub const REQUIRED: [FormField; 10] = [
        FormField::StockName,
        FormField::TradeDirection,
        FormField::TradeCategory,
        FormField::MinEntry,
        FormField::MaxEntry,
        FormField::CurrentMarket,
        FormField::MinTarget,
        FormField::MaxTarget,
        FormField::StopLoss,
        FormField::StopLossType,
    ];

    pub const ALL: [FormField; 13] = [
        FormField::StockName,
        FormField::TradeDirection,
        FormField::TradeCategory,
        FormField::MinEntry,
        FormField::MaxEntry,
        FormField::CurrentMarket,
        FormField::MinTarget,
        FormField::MaxTarget,
        FormField::StopLoss,
        FormField::StopLossType,
        FormField::BookProfit,
        FormField::Notes,
        FormField::RiskyTrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::StockName => "stockName",
            FormField::TradeDirection => "tradeDirection",
            FormField::TradeCategory => "tradeCategory",
            FormField::MinEntry => "minEntry",
            FormField::MaxEntry => "maxEntry",
            FormField::CurrentMarket => "currentMarket",
            FormField::MinTarget => "minTarget",
            FormField::MaxTarget => "maxTarget",
            FormField::StopLoss => "stopLoss",
            FormField::StopLossType => "stopLossType",
            FormField::BookProfit => "bookProfit",
            FormField::Notes => "notes",
            FormField::RiskyTrade => "riskyTrade",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trade form snapshot. Prices stay as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeForm {
    pub stock_name: String,
    pub trade_direction: Option<TradeDirection>,
    pub trade_category: Option<TradeCategory>,
    pub min_entry: String,
    pub max_entry: String,
    pub current_market: String,
    pub min_target: String,
    pub max_target: String,
    pub stop_loss: String,
    pub stop_loss_type: Option<StopLossType>,
    pub book_profit: String,
    pub notes: String,
    pub risky_trade: bool,
}

impl TradeForm {
    pub fn is_buy(&self) -> bool {
        self.trade_direction == Some(TradeDirection::Buy)
    }

    pub fn is_sell(&self) -> bool {
        self.trade_direction == Some(TradeDirection::Sell)
    }

    pub fn tone(&self) -> Tone {
        match self.trade_direction {
            Some(TradeDirection::Buy) => Tone::Buy,
            Some(TradeDirection::Sell) => Tone::Sell,
            None => Tone::Neutral,
        }
    }

    /// True when the field holds nothing: empty text, unset choice or a
    /// cleared risk flag. Numeric text counts as filled even if it does
    /// not parse.
    pub fn is_empty(&self, field: FormField) -> bool {
        match field {
            FormField::StockName => self.stock_name.is_empty(),
            FormField::TradeDirection => self.trade_direction.is_none(),
            FormField::TradeCategory => self.trade_category.is_none(),
            FormField::MinEntry => self.min_entry.is_empty(),
            FormField::MaxEntry => self.max_entry.is_empty(),
            FormField::CurrentMarket => self.current_market.is_empty(),
            FormField::MinTarget => self.min_target.is_empty(),
            FormField::MaxTarget => self.max_target.is_empty(),
            FormField::StopLoss => self.stop_loss.is_empty(),
            FormField::StopLossType => self.stop_loss_type.is_none(),
            FormField::BookProfit => self.book_profit.is_empty(),
            FormField::Notes => self.notes.is_empty(),
            FormField::RiskyTrade => !self.risky_trade,
        }
    }

    /// Returns a copy of the form with one edit applied.
    pub fn with(&self, edit: Edit) -> Self {
        let mut next = self.clone();
        match edit {
            Edit::StockName(v) => next.stock_name = v,
            Edit::TradeDirection(v) => next.trade_direction = v,
            Edit::TradeCategory(v) => next.trade_category = v,
            Edit::MinEntry(v) => next.min_entry = v,
            Edit::MaxEntry(v) => next.max_entry = v,
            Edit::CurrentMarket(v) => next.current_market = v,
            Edit::MinTarget(v) => next.min_target = v,
            Edit::MaxTarget(v) => next.max_target = v,
            Edit::StopLoss(v) => next.stop_loss = v,
            Edit::StopLossType(v) => next.stop_loss_type = v,
            Edit::BookProfit(v) => next.book_profit = v,
            Edit::Notes(v) => next.notes = v,
            Edit::RiskyTrade(v) => next.risky_trade = v,
        }
        next
    }
}

/// A single-field update.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    StockName(String),
    TradeDirection(Option<TradeDirection>),
    TradeCategory(Option<TradeCategory>),
    MinEntry(String),
    MaxEntry(String),
    CurrentMarket(String),
    MinTarget(String),
    MaxTarget(String),
    StopLoss(String),
    StopLossType(Option<StopLossType>),
    BookProfit(String),
    Notes(String),
    RiskyTrade(bool),
}

impl Edit {
    pub fn field(&self) -> FormField {
        match self {
            Edit::StockName(_) => FormField::StockName,
            Edit::TradeDirection(_) => FormField::TradeDirection,
            Edit::TradeCategory(_) => FormField::TradeCategory,
            Edit::MinEntry(_) => FormField::MinEntry,
            Edit::MaxEntry(_) => FormField::MaxEntry,
            Edit::CurrentMarket(_) => FormField::CurrentMarket,
            Edit::MinTarget(_) => FormField::MinTarget,
            Edit::MaxTarget(_) => FormField::MaxTarget,
            Edit::StopLoss(_) => FormField::StopLoss,
            Edit::StopLossType(_) => FormField::StopLossType,
            Edit::BookProfit(_) => FormField::BookProfit,
            Edit::Notes(_) => FormField::Notes,
            Edit::RiskyTrade(_) => FormField::RiskyTrade,
        }
    }

    /// Builds an edit from the raw value an input widget reports.
    ///
    /// An empty string clears a choice field. The risk flag accepts
    /// `true`/`false` (empty means `false`).
    pub fn parse(field: FormField, raw: &str) -> Result<Self, FormError> {
        let invalid = || FormError::InvalidChoice {
            field,
            value: raw.to_string(),
        };
        let text = raw.to_string();

        let edit = match field {
            FormField::StockName => Edit::StockName(text),
            FormField::TradeDirection => {
                Edit::TradeDirection(choice(raw, TradeDirection::parse).ok_or_else(invalid)?)
            }
            FormField::TradeCategory => {
                Edit::TradeCategory(choice(raw, TradeCategory::parse).ok_or_else(invalid)?)
            }
            FormField::MinEntry => Edit::MinEntry(text),
            FormField::MaxEntry => Edit::MaxEntry(text),
            FormField::CurrentMarket => Edit::CurrentMarket(text),
            FormField::MinTarget => Edit::MinTarget(text),
            FormField::MaxTarget => Edit::MaxTarget(text),
            FormField::StopLoss => Edit::StopLoss(text),
            FormField::StopLossType => {
                Edit::StopLossType(choice(raw, StopLossType::parse).ok_or_else(invalid)?)
            }
            FormField::BookProfit => Edit::BookProfit(text),
            FormField::Notes => Edit::Notes(text),
            FormField::RiskyTrade => match raw {
                "" | "false" => Edit::RiskyTrade(false),
                "true" => Edit::RiskyTrade(true),
                _ => return Err(invalid()),
            },
        };
        Ok(edit)
    }
}

/// `Some(None)` for an empty value, `Some(Some(..))` for a known choice,
/// `None` for anything else.
fn choice<T>(raw: &str, parse: fn(&str) -> Option<T>) -> Option<Option<T>> {
    if raw.is_empty() {
        Some(None)
    } else {
        parse(raw).map(Some)
    }
}

/// Parses a price field. Present only when the text is a finite number.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
