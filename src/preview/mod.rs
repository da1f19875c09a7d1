pub mod card;
pub mod export;

pub use card::{PreviewCard, PreviewRow, RiskReward, StopMethod};
pub use export::{CardExporter, FileExporter};
