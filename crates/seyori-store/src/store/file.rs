//! Flat-file JSON store.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::error::StoreResult;
use crate::model::ContactBook;
use crate::store::ContactStore;

/// File-backed store holding the book as pretty-printed JSON.
///
/// Reads and writes the whole document on every call; there is no file
/// locking, so concurrent saves are last-writer-wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for FileStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn ensure_exists<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>> {
        Box::pin(async move {
            if tokio::fs::try_exists(&self.path).await? {
                return Ok(());
            }

            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }

            let body = serde_json::to_string_pretty(&ContactBook::default())?;
            tokio::fs::write(&self.path, body).await?;

            tracing::info!("Created empty contact book");
            Ok(())
        })
    }

    fn load<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = StoreResult<ContactBook>> + Send + 'a>> {
        Box::pin(async move {
            let data = tokio::fs::read_to_string(&self.path).await?;
            Ok(serde_json::from_str(&data)?)
        })
    }

    fn save<'a>(
        &'a self,
        book: &'a ContactBook,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>> {
        Box::pin(async move {
            let body = serde_json::to_string_pretty(book)?;
            tokio::fs::write(&self.path, body).await?;

            tracing::debug!(count = book.count, "Contact book saved");
            Ok(())
        })
    }
}
