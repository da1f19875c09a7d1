pub mod http;
pub mod payload;

pub use http::HttpSubmitter;
pub use payload::SubmissionPayload;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
}

/// Network submission boundary. Receives a payload built from one snapshot.
#[async_trait]
pub trait TradeSubmitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt>;
}
