//! Contact service layer.
//!
//! Business operations on the address book, expressed over plain text.

use crate::book::{AddressBook, Paginator};
use crate::config::Config;
use crate::domain::{Birthday, FieldResult, Name, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::storage::BookStorage;
use tracing::{debug, info, warn};

/// Owns the address book for the lifetime of the session.
pub struct ContactService {
    book: AddressBook,
    storage: Box<dyn BookStorage>,
    page_size: usize,
    find_min_length: usize,
}

impl ContactService {
    /// Create a service over an empty book.
    pub fn new(storage: Box<dyn BookStorage>, config: &Config) -> Self {
        Self::with_book(AddressBook::new(), storage, config)
    }

    /// Create a service over an already loaded book.
    pub fn with_book(book: AddressBook, storage: Box<dyn BookStorage>, config: &Config) -> Self {
        Self {
            book,
            storage,
            page_size: config.page_size,
            find_min_length: config.find_min_length,
        }
    }

    /// Load the stored book, starting empty when nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Any storage failure other than a missing file.
    pub fn open(storage: Box<dyn BookStorage>, config: &Config) -> StorageResult<Self> {
        let book = match storage.load() {
            Ok(book) => book,
            Err(StorageError::NotFound(path)) => {
                info!(path = %path.display(), "No saved address book, starting empty");
                AddressBook::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::with_book(book, storage, config))
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Validate the fields and store a new record, replacing any record with
    /// the same name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFieldError` for the first field that fails validation;
    /// the book is left unchanged.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> FieldResult<String> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        Ok(self
            .book
            .add_record(Record::new(name, Some(phone), birthday)))
    }

    /// Remove a contact by name. Returns `false` if there was none.
    pub fn remove_contact(&mut self, name: &str) -> bool {
        self.book.remove_record(name)
    }

    /// Case-insensitive search across full renderings.
    ///
    /// Queries shorter than the configured minimum are not run.
    pub fn find(&self, query: &str) -> String {
        if query.chars().count() < self.find_min_length {
            debug!(query = %query, "Find query below minimum length");
            return format!(
                "Find param must be at least {} characters",
                self.find_min_length
            );
        }
        self.book.find(query)
    }

    /// Case-sensitive search over names and phone numbers.
    pub fn search(&self, query: &str) -> Vec<(&str, &Record)> {
        self.book.search(query)
    }

    /// Replace `old` with `new` in the named contact's phones.
    ///
    /// Returns `true` if a phone was replaced; `false` when the contact or
    /// the old phone does not exist.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFieldError` if either phone is malformed.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> FieldResult<bool> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;

        let Some(record) = self.book.get_mut(name) else {
            debug!(name = %name, "Change phone for unknown contact");
            return Ok(false);
        };

        let changed = record.edit_phone(&old, new);
        if !changed {
            debug!(name = %name, phone = %old, "Phone to change not found");
        }
        Ok(changed)
    }

    /// Page through the book with the configured page size.
    pub fn pages(&self) -> Paginator<'_> {
        self.book.iterate(self.page_size)
    }

    /// Every record, one per line.
    pub fn render_all(&self) -> String {
        self.book.to_string()
    }

    /// Write the book to storage.
    pub fn save(&self) -> StorageResult<()> {
        self.storage.save(&self.book).inspect_err(|e| {
            warn!(error = %e, "Failed to save address book");
        })
    }
}
