//! Address Book - a small personal contact manager.
//!
//! Contacts hold a name, one or more validated phone numbers, and an
//! optional birthday. They live in a keyed, insertion-ordered collection
//! that supports lookup, substring search, paginated listing, and
//! persistence to a single file.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The address book collection and its paginator
//! - **storage**: Persistence of a whole book
//! - **services**: Text-level operations used by the command layer
//! - **commands**: Command parsing and handling for the interactive prompt
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use book::{AddressBook, Paginator};
pub use config::Config;
pub use domain::{Birthday, InvalidFieldError, Name, Phone};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::Record;
pub use services::ContactService;
pub use storage::{BookStorage, FileStorage};
