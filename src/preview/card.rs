use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::TradeMetrics;
use crate::models::{StopLossType, Tone, TradeCategory, TradeDirection, TradeForm};
use crate::store::FormState;

const PLACEHOLDER: &str = "—";
const NO_SYMBOL: &str = "Select a stock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Entry,
    Market,
    Target,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    pub label: &'static str,
    pub value: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReward {
    pub risk_pct: f64,
    pub reward_pct: f64,
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopMethod {
    pub name: &'static str,
    pub description: &'static str,
}

impl From<StopLossType> for StopMethod {
    fn from(t: StopLossType) -> Self {
        Self {
            name: t.as_str(),
            description: t.description(),
        }
    }
}

/// Read-only, fully resolved view of a form snapshot, ready to be drawn or
/// captured as an image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCard {
    pub symbol: Option<String>,
    pub direction: Option<TradeDirection>,
    pub category: Option<TradeCategory>,
    pub risky: bool,
    pub tone: Tone,
    pub rows: Vec<PreviewRow>,
    pub risk_reward: Option<RiskReward>,
    pub notes: Option<String>,
    pub show_price_map: bool,
    pub stop_method: Option<StopMethod>,
    pub issued_at: String,
    pub metrics: TradeMetrics,
}

impl PreviewCard {
    pub fn resolve(state: &FormState, now: DateTime<Utc>) -> Self {
        let form = &state.form;
        let metrics = TradeMetrics::derive(form);

        let risk_reward = match (metrics.target_mid, metrics.risk_pct(), metrics.reward_pct()) {
            (Some(_), Some(risk_pct), Some(reward_pct)) => Some(RiskReward {
                risk_pct,
                reward_pct,
                ratio: metrics.risk_reward,
            }),
            _ => None,
        };

        Self {
            symbol: non_empty(&form.stock_name),
            direction: form.trade_direction,
            category: form.trade_category,
            risky: form.risky_trade,
            tone: form.tone(),
            rows: rows(form),
            risk_reward,
            notes: non_empty(&form.notes),
            show_price_map: !form.stop_loss.is_empty()
                && !form.current_market.is_empty()
                && (!form.min_target.is_empty() || !form.max_target.is_empty()),
            stop_method: form.stop_loss_type.map(StopMethod::from),
            issued_at: now.with_timezone(&Kolkata).format("%-d %b, %-I:%M %P").to_string(),
            metrics,
        }
    }

    pub fn headline(&self) -> &str {
        self.symbol.as_deref().unwrap_or(NO_SYMBOL)
    }

    /// File stem used when the card is exported.
    pub fn file_stem(&self) -> String {
        match &self.symbol {
            Some(s) => s
                .chars()
                .map(|c| match c {
                    'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' => c,
                    _ => '_',
                })
                .collect(),
            None => "Trade-Preview".to_string(),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(d) = self.direction {
            tags.push(d.to_string());
        }
        if let Some(c) = self.category {
            tags.push(c.to_string());
        }
        if self.risky {
            tags.push("⚠ RISKY".to_string());
        }
        tags
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn range(min: &str, max: &str) -> String {
    if min.is_empty() || max.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("₹{min} – ₹{max}")
    }
}

fn price(v: &str) -> String {
    if v.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("₹{v}")
    }
}

fn rows(form: &TradeForm) -> Vec<PreviewRow> {
    vec![
        PreviewRow {
            label: "Entry Range",
            value: range(&form.min_entry, &form.max_entry),
            accent: Accent::Entry,
        },
        PreviewRow {
            label: "CMP",
            value: price(&form.current_market),
            accent: Accent::Market,
        },
        PreviewRow {
            label: "Target Range",
            value: range(&form.min_target, &form.max_target),
            accent: Accent::Target,
        },
        PreviewRow {
            label: "Stop Loss",
            value: price(&form.stop_loss),
            accent: Accent::Stop,
        },
    ]
}

impl fmt::Display for PreviewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        let tags = self.tags();
        if !tags.is_empty() {
            writeln!(f, "[{}]", tags.join("] ["))?;
        }
        for row in &self.rows {
            writeln!(f, "  {:<14}{}", row.label, row.value)?;
        }
        if let Some(rr) = &self.risk_reward {
            writeln!(f, "Risk / Reward")?;
            writeln!(f, "  {:<14}{:.2}%", "Risk", rr.risk_pct)?;
            writeln!(f, "  {:<14}{:.2}%", "Reward", rr.reward_pct)?;
            if let Some(ratio) = rr.ratio {
                writeln!(f, "  {:<14}1 : {:.2}", "R:R Ratio", ratio)?;
            }
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "Notes")?;
            writeln!(f, "  {notes}")?;
        }
        if let Some(method) = &self.stop_method {
            writeln!(f, "SL Method: {} ({})", method.name, method.description)?;
        }
        write!(f, "{}", self.issued_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_form, sample_time};

    fn card(form: TradeForm) -> PreviewCard {
        let state = FormState {
            form,
            ..Default::default()
        };
        PreviewCard::resolve(&state, sample_time())
    }

    #[test]
    fn empty_form_shows_placeholders() {
        let c = card(TradeForm::default());
        assert_eq!(c.headline(), "Select a stock");
        assert!(c.rows.iter().all(|r| r.value == "—"));
        assert!(c.risk_reward.is_none());
        assert!(!c.show_price_map);
        assert!(c.tags().is_empty());
        assert_eq!(c.file_stem(), "Trade-Preview");
    }

    #[test]
    fn full_form_resolves_everything() {
        let c = card(sample_form());
        assert_eq!(c.headline(), "RELIANCE");
        assert_eq!(c.rows[0].value, "₹100 – ₹120");
        assert_eq!(c.rows[1].value, "₹112");
        assert_eq!(c.rows[3].value, "₹95");

        let rr = c.risk_reward.unwrap();
        assert!((rr.risk_pct - 13.64).abs() < 1e-9);
        assert!((rr.reward_pct - 36.36).abs() < 1e-9);
        assert_eq!(rr.ratio, Some(2.66));
        assert!(c.show_price_map);
        assert_eq!(
            c.stop_method.as_ref().unwrap().description,
            "Static price level, does not move."
        );
        assert_eq!(c.tags(), vec!["BUY", "Swing"]);
    }

    #[test]
    fn risk_block_needs_target_midpoint() {
        let mut form = sample_form();
        form.max_target = String::new();
        let c = card(form);
        assert!(c.risk_reward.is_none());
        assert!(c.show_price_map);
        assert_eq!(c.rows[2].value, "—");
    }

    #[test]
    fn issue_time_is_india_local() {
        // 2024-01-15T12:00:00Z is 17:30 in Kolkata
        let c = card(TradeForm::default());
        assert_eq!(c.issued_at, "15 Jan, 5:30 pm");
    }

    #[test]
    fn risky_card_renders_tag() {
        let mut form = sample_form();
        form.risky_trade = true;
        let c = card(form);
        let text = c.to_string();
        assert!(text.contains("⚠ RISKY"));
        assert!(text.contains("1 : 2.66"));
    }

    #[test]
    fn file_stem_is_filesystem_safe() {
        let mut form = TradeForm::default();
        form.stock_name = "M&M/NSE".to_string();
        assert_eq!(card(form).file_stem(), "M_M_NSE");
    }
}
