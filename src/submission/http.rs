use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::SubmitError;
use crate::submission::{SubmissionPayload, SubmitReceipt, TradeSubmitter};

#[derive(Debug, Deserialize)]
struct BackendReply {
    #[serde(default)]
    success: bool,
}

pub struct HttpSubmitter {
    client: Client,
    url: String,
}

impl HttpSubmitter {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder().timeout(cfg.request_timeout()).build()?;
        Ok(Self {
            client,
            url: cfg.trades_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, SubmitError> {
        let resp = self.client.post(&self.url).json(payload).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let accepted = status.is_success()
            && serde_json::from_str::<BackendReply>(&body).is_ok_and(|r| r.success);
        if !accepted {
            warn!("Backend returned an error ({}): {}", status, body);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Trade created successfully: {}", payload.stock_search);
        Ok(SubmitReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl TradeSubmitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt> {
        Ok(self.post(payload).await?)
    }
}
