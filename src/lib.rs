pub mod config;
pub mod telemetry;
pub mod error;
pub mod domain { pub mod page; }
pub mod services { pub mod batch; pub mod clock; pub mod generator; pub mod storage; }

use std::path::PathBuf;

use crate::config::Config;
use crate::services::{batch, clock::Clock, storage::Storage};

/// Writes `cfg.page_count` pages into `cfg.output_dir`.
pub async fn run<C>(cfg: Config, clock: C) -> error::Result<Vec<PathBuf>>
where
    C: Clock + Clone + 'static,
{
    let storage = Storage::new(cfg.output_dir);
    tracing::info!(dir = %storage.dir().display(), count = cfg.page_count, accent = %cfg.accent, "generating pages");
    batch::generate_many(storage, clock, cfg.accent, cfg.page_count).await
}
