use crate::book::AddressBook;
use crate::error::StorageResult;

/// Persistence for a whole address book.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (single file, in-memory for tests).
pub trait BookStorage {
    /// Read the stored book into a fresh `AddressBook`.
    ///
    /// Returns `StorageError::NotFound` when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Store `book`, fully replacing what was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
