use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;
use crate::models::{Edit, FormField, TradeForm};

pub type ValidationErrors = BTreeMap<FormField, ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSource {
    Export,
    Submission,
}

impl fmt::Display for NoticeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeSource::Export => write!(f, "export"),
            NoticeSource::Submission => write!(f, "submission"),
        }
    }
}

/// Non-blocking message about a failed boundary call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub source: NoticeSource,
    pub message: String,
}

impl Notice {
    pub fn new(source: NoticeSource, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub form: TradeForm,
    pub errors: ValidationErrors,
    pub submitted: bool,
    pub notice: Option<Notice>,
}

impl FormState {
    pub fn error(&self, field: FormField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit(Edit),
    ToggleRisky,
    Submit,
    Reset,
    Notify(Notice),
    DismissNotice,
}

impl From<Edit> for FormAction {
    fn from(edit: Edit) -> Self {
        FormAction::Edit(edit)
    }
}

/// Required-field check. Only presence is checked: unparseable prices and
/// inverted ranges pass.
pub fn validate(form: &TradeForm) -> ValidationErrors {
    FormField::REQUIRED
        .into_iter()
        .filter(|f| form.is_empty(*f))
        .map(|f| (f, ValidationError::Required))
        .collect()
}

pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::Edit(edit) => {
            let field = edit.field();
            let mut errors = state.errors.clone();
            errors.remove(&field);
            FormState {
                form: state.form.with(edit),
                errors,
                ..state.clone()
            }
        }
        FormAction::ToggleRisky => {
            let flag = !state.form.risky_trade;
            reduce(state, FormAction::Edit(Edit::RiskyTrade(flag)))
        }
        FormAction::Submit => {
            let errors = validate(&state.form);
            FormState {
                submitted: state.submitted || errors.is_empty(),
                errors,
                ..state.clone()
            }
        }
        FormAction::Reset => FormState::default(),
        FormAction::Notify(notice) => FormState {
            notice: Some(notice),
            ..state.clone()
        },
        FormAction::DismissNotice => FormState {
            notice: None,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StopLossType, TradeDirection};
    use crate::test_helpers::sample_form;

    #[test]
    fn empty_form_fails_every_required_field() {
        let errors = validate(&TradeForm::default());
        assert_eq!(errors.len(), FormField::REQUIRED.len());
        assert!(errors.values().all(|e| *e == ValidationError::Required));
        assert!(!errors.contains_key(&FormField::Notes));
        assert!(!errors.contains_key(&FormField::BookProfit));
    }

    #[test]
    fn complete_form_validates_regardless_of_numbers() {
        let mut form = sample_form();
        form.min_entry = "abc".to_string();
        form.max_entry = "5".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in FormField::REQUIRED {
            let form = sample_form().with(Edit::parse(field, "").unwrap());
            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "{field}");
            assert_eq!(errors.get(&field), Some(&ValidationError::Required));
        }
    }

    #[test]
    fn edit_clears_only_its_own_error() {
        let state = reduce(&FormState::default(), FormAction::Submit);
        assert!(state.error(FormField::MinEntry).is_some());

        let state = reduce(&state, Edit::MinEntry("100".to_string()).into());
        assert_eq!(state.error(FormField::MinEntry), None);
        assert_eq!(state.error(FormField::MaxEntry), Some(ValidationError::Required));
        assert_eq!(state.errors.len(), FormField::REQUIRED.len() - 1);
    }

    #[test]
    fn clearing_a_field_does_not_raise_an_error() {
        let state = reduce(&FormState::default(), Edit::StockName(String::new()).into());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn set_is_idempotent() {
        let start = reduce(&FormState::default(), FormAction::Submit);
        let edit = Edit::StopLossType(Some(StopLossType::Trailing));

        let once = reduce(&start, edit.clone().into());
        let twice = reduce(&once, edit.into());
        assert_eq!(once, twice);
        assert_eq!(twice.error(FormField::StopLossType), None);
    }

    #[test]
    fn submit_with_errors_stays_unsubmitted() {
        let state = reduce(&FormState::default(), FormAction::Submit);
        assert!(!state.submitted);
    }

    #[test]
    fn submit_complete_form() {
        let state = FormState {
            form: sample_form(),
            ..Default::default()
        };
        let state = reduce(&state, FormAction::Submit);
        assert!(state.submitted);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn toggle_risky_flips_flag() {
        let state = reduce(&FormState::default(), FormAction::ToggleRisky);
        assert!(state.form.risky_trade);
        let state = reduce(&state, FormAction::ToggleRisky);
        assert!(!state.form.risky_trade);
    }

    #[test]
    fn notice_does_not_touch_form() {
        let state = FormState {
            form: sample_form(),
            ..Default::default()
        };
        let notice = Notice::new(NoticeSource::Submission, "backend down");
        let next = reduce(&state, FormAction::Notify(notice.clone()));
        assert_eq!(next.form, state.form);
        assert_eq!(next.notice, Some(notice));

        let cleared = reduce(&next, FormAction::DismissNotice);
        assert_eq!(cleared.notice, None);
    }

    #[test]
    fn reset_returns_defaults() {
        let edit = Edit::TradeDirection(Some(TradeDirection::Buy));
        let state = reduce(&FormState::default(), edit.into());
        assert_eq!(reduce(&state, FormAction::Reset), FormState::default());
    }
}
