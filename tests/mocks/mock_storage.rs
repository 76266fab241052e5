use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, BookStorage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock book storage for testing.
///
/// Keeps the last saved book in memory and tracks method calls for
/// verification. Clones share state, so a test can keep a handle while the
/// service owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStorage {
    saved: Rc<RefCell<Option<AddressBook>>>,
    call_counts: Rc<RefCell<HashMap<String, usize>>>,
    fail_saves: Rc<RefCell<bool>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create storage with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let storage = Self::new();
        *storage.saved.borrow_mut() = Some(book);
        storage
    }

    /// The last saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.borrow_mut() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookStorage for MockStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        self.saved
            .borrow()
            .clone()
            .ok_or_else(|| StorageError::NotFound("mock".into()))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.borrow() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only mock",
            )));
        }
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
