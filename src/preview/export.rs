use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::preview::PreviewCard;

/// Image-export capability. Receives a fully resolved card and returns
/// where the capture ended up.
#[async_trait]
pub trait CardExporter: Send + Sync {
    async fn export(&self, card: &PreviewCard) -> Result<PathBuf>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    background: &'a str,
    pixel_ratio: u32,
    card: &'a PreviewCard,
}

/// Writes the resolved card plus render hints as JSON, for an external
/// renderer to rasterise.
pub struct FileExporter {
    dir: PathBuf,
    background: String,
    pixel_ratio: u32,
}

impl FileExporter {
    pub fn new(cfg: &Config) -> Self {
        Self {
            dir: cfg.export_dir.clone(),
            background: cfg.export_background.clone(),
            pixel_ratio: cfg.pixel_ratio,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl CardExporter for FileExporter {
    async fn export(&self, card: &PreviewCard) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create export dir {}", self.dir.display()))?;

        let doc = ExportDocument {
            background: &self.background,
            pixel_ratio: self.pixel_ratio,
            card,
        };
        let json = serde_json::to_vec_pretty(&doc).context("Failed to serialise preview card")?;

        let path = self.dir.join(format!("{}.json", card.file_stem()));
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Exported trade card to {}", path.display());
        Ok(path)
    }
}
