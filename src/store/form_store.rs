use std::sync::Arc;
use tracing::debug;

use crate::core::TradeMetrics;
use crate::error::FormError;
use crate::models::{Edit, FormField};
use crate::store::state::{reduce, validate, FormAction, FormState, ValidationErrors};

/// Owns the current form snapshot. Every dispatch swaps in a new `Arc`, so
/// handed-out snapshots never change underneath their readers.
#[derive(Debug, Default)]
pub struct FormStore {
    state: Arc<FormState>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> Arc<FormState> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: FormAction) -> Arc<FormState> {
        debug!(?action, "form dispatch");
        self.state = Arc::new(reduce(&self.state, action));
        self.snapshot()
    }

    pub fn set(&mut self, edit: Edit) -> Arc<FormState> {
        self.dispatch(FormAction::Edit(edit))
    }

    /// Applies a raw widget value to the named field.
    pub fn set_raw(&mut self, field: &str, raw: &str) -> Result<Arc<FormState>, FormError> {
        let field =
            FormField::parse(field).ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        Ok(self.set(Edit::parse(field, raw)?))
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.state.form)
    }

    /// Runs validation and records the result. True once the form is submitted.
    pub fn submit(&mut self) -> bool {
        self.dispatch(FormAction::Submit).submitted
    }

    pub fn metrics(&self) -> TradeMetrics {
        TradeMetrics::derive(&self.state.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeDirection;

    #[test]
    fn old_snapshots_are_unchanged_by_dispatch() {
        let mut store = FormStore::new();
        let before = store.snapshot();
        store.set(Edit::StockName("WIPRO".to_string()));

        assert_eq!(before.form.stock_name, "");
        assert_eq!(store.snapshot().form.stock_name, "WIPRO");
    }

    #[test]
    fn set_raw_parses_field_and_value() {
        let mut store = FormStore::new();
        let state = store.set_raw("tradeDirection", "SELL").unwrap();
        assert_eq!(state.form.trade_direction, Some(TradeDirection::Sell));

        assert_eq!(
            store.set_raw("quantity", "10").unwrap_err(),
            FormError::UnknownField("quantity".to_string())
        );
        assert!(store.set_raw("tradeCategory", "Scalp").is_err());
        assert_eq!(store.snapshot().form.trade_category, None);
    }

    #[test]
    fn metrics_follow_latest_snapshot() {
        let mut store = FormStore::new();
        store.set(Edit::MinEntry("100".to_string()));
        assert_eq!(store.metrics().entry_mid, None);

        store.set(Edit::MaxEntry("120".to_string()));
        assert_eq!(store.metrics().entry_mid, Some(110.0));
    }

    #[test]
    fn submit_reports_outcome() {
        let mut store = FormStore::new();
        assert!(!store.submit());
        assert_eq!(store.snapshot().errors, store.validate());
    }
}
