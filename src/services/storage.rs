use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::page::{Page, MAX_NAME_SUFFIX};
use crate::error::{AppError, Result};

/// Output directory for rendered pages.
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `page` under its timestamped name, adding `_1`, `_2`, ... when that name is
    /// taken. Existing files are never overwritten. Returns the path written.
    pub async fn write_page(&self, page: &Page) -> Result<PathBuf> {
        self.write_page_from(page, 0).await
    }

    /// Like [`Storage::write_page`], but tries names from `first_suffix` upward. Batches pass each
    /// page's index so concurrent writers sharing a timestamp rarely contend for a name.
    pub async fn write_page_from(&self, page: &Page, first_suffix: u32) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::io(&self.dir, e))?;

        let last = first_suffix.saturating_add(MAX_NAME_SUFFIX);
        for suffix in first_suffix..last {
            let path = self.dir.join(page.file_name(suffix));
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(f) => f,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(AppError::io(path, e)),
            };
            let written = match file.write_all(page.html.as_bytes()).await {
                Ok(()) => file.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                drop(file);
                abandon(&path).await;
                return Err(AppError::io(path, e));
            }
            tracing::debug!(path = %path.display(), bytes = page.html.len(), "page saved");
            return Ok(path);
        }

        Err(AppError::NameExhausted { stem: page.event.file_stem(), attempts: last - first_suffix })
    }
}

/// Best-effort removal of a partially written page so its name is free again.
async fn abandon(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial page"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove partial page"),
    }
}
