//! The keyed contact collection and its paginator.

mod address_book;
mod paginator;

pub use address_book::{AddressBook, EMPTY_BOOK_MESSAGE};
pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
