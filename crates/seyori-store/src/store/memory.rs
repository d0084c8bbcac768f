//! In-memory store, used as a test double for handlers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{StoreError, StoreResult};
use crate::model::ContactBook;
use crate::store::ContactStore;

/// Store keeping the book in memory.
///
/// Lets handler tests run without real I/O, and can be switched into a
/// failing mode to exercise the internal-error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    book: Mutex<ContactBook>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a book.
    #[must_use]
    pub fn with_book(book: ContactBook) -> Self {
        Self {
            book: Mutex::new(book),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail.
    pub fn fail_loads(&self) {
        self.fail_loads.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent `save` fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Returns a copy of the current book.
    #[must_use]
    pub fn snapshot(&self) -> ContactBook {
        self.lock_book().clone()
    }

    /// Locks the book and recovers from poisoning.
    fn lock_book(&self) -> std::sync::MutexGuard<'_, ContactBook> {
        match self.book.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.book.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl ContactStore for MemoryStore {
    fn ensure_exists<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>> {
        Box::pin(async move { Ok(()) })
    }

    fn load<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = StoreResult<ContactBook>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_loads.load(Ordering::SeqCst) {
                return Err(StoreError::Io(std::io::Error::other(
                    "simulated load failure",
                )));
            }
            Ok(self.lock_book().clone())
        })
    }

    fn save<'a>(
        &'a self,
        book: &'a ContactBook,
    ) -> Pin<Box<dyn Future<Output = StoreResult<()>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(StoreError::Io(std::io::Error::other(
                    "simulated save failure",
                )));
            }
            *self.lock_book() = book.clone();
            Ok(())
        })
    }
}
