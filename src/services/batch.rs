use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::page::Accent;
use crate::error::{AppError, Result};
use crate::services::{clock::Clock, generator::generate_page, storage::Storage};

/// Generates `count` independent pages, one task each, and writes them to `storage`.
/// Individual failures are logged; the batch only fails when nothing was written.
pub async fn generate_many<C>(storage: Storage, clock: C, accent: Accent, count: usize) -> Result<Vec<PathBuf>>
where
    C: Clock + Clone + 'static,
{
    let mut tasks = Vec::with_capacity(count);
    for index in 0..count {
        let storage = storage.clone();
        let clock = clock.clone();
        let first_suffix = u32::try_from(index).unwrap_or(u32::MAX);
        tasks.push(tokio::spawn(async move {
            let page = generate_page(&clock, &mut rand::thread_rng(), accent);
            storage.write_page_from(&page, first_suffix).await.map(|path| (path, page.event))
        }));
    }

    let mut written = Vec::with_capacity(count);
    let mut failed = 0usize;
    for t in tasks {
        match t.await {
            Ok(Ok((path, event))) => {
                info!(path = %path.display(), random_value = event.random_value, "generated page");
                written.push(path);
            }
            Ok(Err(e)) => {
                failed += 1;
                warn!(error = %e, "failed to save one page");
            }
            Err(e) => {
                failed += 1;
                warn!(error = %e, "generation task aborted");
            }
        }
    }

    if failed > 0 {
        warn!(failed, written = written.len(), "batch finished with failures");
    }
    if written.is_empty() && count > 0 {
        return Err(AppError::NothingWritten { requested: count });
    }
    Ok(written)
}
