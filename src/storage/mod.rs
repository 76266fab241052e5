mod file_storage;
mod traits;

pub use file_storage::FileStorage;
pub use traits::BookStorage;
