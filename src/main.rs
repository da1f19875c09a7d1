use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use tradebook::config::Config;
use tradebook::core::symbols;
use tradebook::desk::TradeDesk;
use tradebook::preview::FileExporter;
use tradebook::submission::HttpSubmitter;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: tradebook <draft.json>");
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let draft: Map<String, Value> =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a JSON object"))?;

    let exporter = Box::new(FileExporter::new(&cfg));
    let submitter = Box::new(HttpSubmitter::new(&cfg)?);
    let mut desk = TradeDesk::new(exporter, submitter);

    for (field, value) in &draft {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        if let Err(e) = desk.edit_raw(field, &text) {
            warn!("Skipping draft entry: {}", e);
        }
    }

    let symbol = desk.state().form.stock_name.clone();
    if !symbol.is_empty() && !symbols::is_listed(&symbol) {
        warn!("{} is not in the stock catalogue", symbol);
    }

    let submitted = desk.submit();
    println!("{}", desk.preview());

    if !submitted {
        for (field, err) in &desk.state().errors {
            println!("  {field}: {err}");
        }
        return Ok(());
    }

    let report = desk.publish().await;
    if let Some(notice) = &desk.state().notice {
        warn!("{}: {}", notice.source, notice.message);
    }
    info!(
        "Publish finished: exported={} submitted={}",
        report.exported.is_some(),
        report.submitted.is_some()
    );

    Ok(())
}
