use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::FormError;
use crate::models::Edit;
use crate::preview::{CardExporter, PreviewCard};
use crate::store::{FormAction, FormState, FormStore, Notice, NoticeSource};
use crate::submission::{SubmissionPayload, SubmitReceipt, TradeSubmitter};

/// Outcome of a publish attempt. Each leg fails independently.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub exported: Option<PathBuf>,
    pub submitted: Option<SubmitReceipt>,
}

impl PublishReport {
    pub fn is_complete(&self) -> bool {
        self.exported.is_some() && self.submitted.is_some()
    }
}

/// One editing session: the form store plus the export and submission
/// boundaries it hands snapshots to.
pub struct TradeDesk {
    store: FormStore,
    exporter: Box<dyn CardExporter>,
    submitter: Box<dyn TradeSubmitter>,
}

impl TradeDesk {
    pub fn new(exporter: Box<dyn CardExporter>, submitter: Box<dyn TradeSubmitter>) -> Self {
        Self {
            store: FormStore::new(),
            exporter,
            submitter,
        }
    }

    pub fn state(&self) -> Arc<FormState> {
        self.store.snapshot()
    }

    pub fn edit(&mut self, edit: Edit) -> Arc<FormState> {
        self.store.set(edit)
    }

    pub fn edit_raw(&mut self, field: &str, raw: &str) -> Result<Arc<FormState>, FormError> {
        self.store.set_raw(field, raw)
    }

    pub fn dispatch(&mut self, action: FormAction) -> Arc<FormState> {
        self.store.dispatch(action)
    }

    pub fn submit(&mut self) -> bool {
        let ok = self.store.submit();
        if !ok {
            let missing: Vec<&str> = self.state().errors.keys().map(|f| f.as_str()).collect();
            info!("Submit blocked, missing: {}", missing.join(", "));
        }
        ok
    }

    pub fn preview(&self) -> PreviewCard {
        PreviewCard::resolve(&self.state(), Utc::now())
    }

    /// Exports the card, then sends the payload, both from the same
    /// snapshot. Failures become notices; the form is left as it was.
    pub async fn publish(&mut self) -> PublishReport {
        let snapshot = self.state();
        let card = PreviewCard::resolve(&snapshot, Utc::now());
        let payload = SubmissionPayload::from(&snapshot.form);
        let mut report = PublishReport::default();

        match self.exporter.export(&card).await {
            Ok(path) => report.exported = Some(path),
            Err(e) => {
                error!("Image export failed: {:#}", e);
                self.notify(NoticeSource::Export, format!("Image export failed: {e}"));
            }
        }

        match self.submitter.submit(&payload).await {
            Ok(receipt) => report.submitted = Some(receipt),
            Err(e) => {
                error!("Trade submission failed: {:#}", e);
                self.notify(NoticeSource::Submission, format!("Submission failed: {e}"));
            }
        }

        report
    }

    fn notify(&mut self, source: NoticeSource, message: String) {
        self.store.dispatch(FormAction::Notify(Notice::new(source, message)));
    }
}
