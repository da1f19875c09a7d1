use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tradebook::preview::{CardExporter, PreviewCard};
use tradebook::submission::{SubmissionPayload, SubmitReceipt, TradeSubmitter};

/// Raw widget values for a complete long setup on RELIANCE.
pub const SAMPLE_DRAFT: [(&str, &str); 10] = [
    ("stockName", "RELIANCE"),
    ("tradeDirection", "BUY"),
    ("tradeCategory", "Swing"),
    ("minEntry", "100"),
    ("maxEntry", "120"),
    ("currentMarket", "112"),
    ("minTarget", "140"),
    ("maxTarget", "160"),
    ("stopLoss", "95"),
    ("stopLossType", "Fixed"),
];

#[derive(Clone, Default)]
pub struct RecordingExporter {
    pub cards: Arc<Mutex<Vec<PreviewCard>>>,
    pub fail: bool,
}

#[async_trait]
impl CardExporter for RecordingExporter {
    async fn export(&self, card: &PreviewCard) -> Result<PathBuf> {
        if self.fail {
            bail!("canvas unavailable");
        }
        self.cards.lock().unwrap().push(card.clone());
        Ok(PathBuf::from(format!("{}.png", card.file_stem())))
    }
}

#[derive(Clone, Default)]
pub struct RecordingSubmitter {
    pub payloads: Arc<Mutex<Vec<SubmissionPayload>>>,
    pub fail: bool,
}

#[async_trait]
impl TradeSubmitter for RecordingSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt> {
        if self.fail {
            bail!("connection refused");
        }
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(SubmitReceipt {
            status: 201,
            body: r#"{"success":true}"#.to_string(),
        })
    }
}
