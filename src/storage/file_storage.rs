use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::storage::traits::BookStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// On-disk layout: the records in insertion order.
#[derive(Serialize)]
struct BookFileRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookFile {
    #[serde(default)]
    records: Vec<Record>,
}

/// Stores the book as one JSON document at a fixed path.
///
/// Writes go straight to the target file. There is no locking or
/// partial-write recovery; a single process owns the file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookStorage for FileStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
            _ => StorageError::Io(e),
        })?;
        let file: BookFile = serde_json::from_str(&content)?;

        let mut book = AddressBook::new();
        for record in file.records {
            if book.contains(record.name().as_str()) {
                return Err(StorageError::Corrupt(format!(
                    "duplicate record name '{}'",
                    record.name()
                )));
            }
            book.add_record(record);
        }

        info!(path = %self.path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let file = BookFileRef {
            records: book.records().collect(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;

        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }
}
