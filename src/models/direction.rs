use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TradeDirection {
    pub const ALL: [TradeDirection; 2] = [TradeDirection::Buy, TradeDirection::Sell];

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "BUY",
            TradeDirection::Sell => "SELL",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeCategory {
    Intraday,
    Swing,
    Positional,
    #[serde(rename = "BTST")]
    Btst,
    Options,
    Futures,
}

impl fmt::Display for TradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TradeCategory {
    pub const ALL: [TradeCategory; 6] = [
        TradeCategory::Intraday,
        TradeCategory::Swing,
        TradeCategory::Positional,
        TradeCategory::Btst,
        TradeCategory::Options,
        TradeCategory::Futures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeCategory::Intraday => "Intraday",
            TradeCategory::Swing => "Swing",
            TradeCategory::Positional => "Positional",
            TradeCategory::Btst => "BTST",
            TradeCategory::Options => "Options",
            TradeCategory::Futures => "Futures",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopLossType {
    Fixed,
    Trailing,
    #[serde(rename = "ATR Based")]
    AtrBased,
    #[serde(rename = "Candle Close")]
    CandleClose,
    #[serde(rename = "Structure Based")]
    StructureBased,
}

impl fmt::Display for StopLossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StopLossType {
    pub const ALL: [StopLossType; 5] = [
        StopLossType::Fixed,
        StopLossType::Trailing,
        StopLossType::AtrBased,
        StopLossType::CandleClose,
        StopLossType::StructureBased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StopLossType::Fixed => "Fixed",
            StopLossType::Trailing => "Trailing",
            StopLossType::AtrBased => "ATR Based",
            StopLossType::CandleClose => "Candle Close",
            StopLossType::StructureBased => "Structure Based",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// One-line explanation shown under the SL method on the card.
    pub fn description(&self) -> &'static str {
        match self {
            StopLossType::Fixed => "Static price level, does not move.",
            StopLossType::Trailing => "Follows price, locks in profits.",
            StopLossType::AtrBased => "Volatility-adjusted stop loss.",
            StopLossType::CandleClose => "Exits on candle close below SL.",
            StopLossType::StructureBased => "Based on key chart structure.",
        }
    }
}

/// Styling hint derived from the chosen direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Buy,
    Sell,
    Neutral,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Buy => write!(f, "buy"),
            Tone::Sell => write!(f, "sell"),
            Tone::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_parse_their_display_strings() {
        for d in TradeDirection::ALL {
            assert_eq!(TradeDirection::parse(d.as_str()), Some(d));
        }
        for c in TradeCategory::ALL {
            assert_eq!(TradeCategory::parse(&c.to_string()), Some(c));
        }
        for t in StopLossType::ALL {
            assert_eq!(StopLossType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn unknown_choices_are_rejected() {
        assert_eq!(TradeDirection::parse("HOLD"), None);
        assert_eq!(TradeDirection::parse("buy"), None);
        assert_eq!(TradeCategory::parse("LONG_TERM"), None);
        assert_eq!(StopLossType::parse("Intraday"), None);
    }

    #[test]
    fn serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&StopLossType::AtrBased).unwrap(),
            "\"ATR Based\""
        );
        assert_eq!(serde_json::to_string(&TradeCategory::Btst).unwrap(), "\"BTST\"");
        assert_eq!(serde_json::to_string(&TradeDirection::Sell).unwrap(), "\"SELL\"");
    }
}
