use serde::{Deserialize, Serialize};

use crate::models::{parse_price, TradeForm};

/// Absorbs float noise before truncating, e.g. `0.29 * 100.0 = 28.999..`.
const TRUNC_EPSILON: f64 = 1e-9;

/// Display metrics derived from a form snapshot. Never stored on the form;
/// recompute from the latest snapshot whenever they are needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeMetrics {
    pub entry_mid: Option<f64>,
    pub target_mid: Option<f64>,
    pub sl_pct: Option<f64>,
    pub tgt_pct: Option<f64>,
    pub risk_reward: Option<f64>,
}

impl TradeMetrics {
    pub fn derive(form: &TradeForm) -> Self {
        let entry = entry_mid(form);
        let target = target_mid(form);
        let sl = sl_pct(entry, parse_price(&form.stop_loss));
        let tgt = tgt_pct(entry, target);

        Self {
            entry_mid: entry,
            target_mid: target,
            sl_pct: sl,
            tgt_pct: tgt,
            risk_reward: risk_reward(sl, tgt),
        }
    }

    /// Size of the loss leg as shown on the card.
    pub fn risk_pct(&self) -> Option<f64> {
        self.sl_pct.map(f64::abs)
    }

    pub fn reward_pct(&self) -> Option<f64> {
        self.tgt_pct
    }
}

/// Exact midpoint of a price band. Halves before adding so the sum of two
/// large finite prices cannot overflow.
pub fn raw_midpoint(min: Option<f64>, max: Option<f64>) -> Option<f64> {
    Some(min? / 2.0 + max? / 2.0).filter(|v| v.is_finite())
}

/// Midpoint rounded to cents. Lies inside the band whenever both bounds are
/// quoted in whole paise; sub-paise bounds can round past them.
pub fn midpoint(min: Option<f64>, max: Option<f64>) -> Option<f64> {
    raw_midpoint(min, max).map(round2).filter(|v| v.is_finite())
}

pub fn entry_mid(form: &TradeForm) -> Option<f64> {
    midpoint(parse_price(&form.min_entry), parse_price(&form.max_entry))
}

pub fn target_mid(form: &TradeForm) -> Option<f64> {
    midpoint(parse_price(&form.min_target), parse_price(&form.max_target))
}

/// Signed move from `base` to `level` in percent. `None` on a zero base.
pub fn pct_change(base: Option<f64>, level: Option<f64>) -> Option<f64> {
    let base = base.filter(|b| *b != 0.0)?;
    Some(round2((level? - base) / base * 100.0)).filter(|v| v.is_finite())
}

pub fn sl_pct(entry_mid: Option<f64>, stop_loss: Option<f64>) -> Option<f64> {
    pct_change(entry_mid, stop_loss)
}

pub fn tgt_pct(entry_mid: Option<f64>, target_mid: Option<f64>) -> Option<f64> {
    pct_change(entry_mid, target_mid)
}

/// Reward per unit of risk, truncated to two decimals. `None` when the stop
/// sits exactly on the entry midpoint.
pub fn risk_reward(sl_pct: Option<f64>, tgt_pct: Option<f64>) -> Option<f64> {
    let risk = sl_pct?.abs();
    let reward = tgt_pct?.abs();
    if risk == 0.0 {
        return None;
    }
    Some(trunc2(reward / risk)).filter(|v| v.is_finite())
}

pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    // magnitudes this large carry no fractional digits
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / 100.0
}

fn trunc2(x: f64) -> f64 {
    (x * 100.0 + TRUNC_EPSILON).trunc() / 100.0
}
