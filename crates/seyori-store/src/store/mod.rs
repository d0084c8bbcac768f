//! Storage backends for the contact book.

use std::future::Future;
use std::pin::Pin;

use crate::error::StoreResult;
use crate::model::ContactBook;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persistence boundary for the contact book.
///
/// Every request loads the full document and mutating requests overwrite it
/// wholesale. There is deliberately no locking or versioning: concurrent
/// writers race and the last save wins. Any load failure is surfaced to the
/// caller rather than masked as an empty book.
pub trait ContactStore: Send + Sync {
    /// Creates the empty book at the backing location if it is absent.
    fn ensure_exists<'a>(&'a self)
    -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>>;

    /// Reads and parses the book.
    fn load<'a>(&'a self)
    -> Pin<Box<dyn Future<Output = StoreResult<ContactBook>> + Send + 'a>>;

    /// Serializes and persists the whole book.
    fn save<'a>(
        &'a self,
        book: &'a ContactBook,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>>;
}
