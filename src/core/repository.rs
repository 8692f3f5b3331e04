use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId, NewBook};
use crate::core::library::{LibraryError, LibraryResult};

/// Storage capability for book records.
///
/// Every backend owns the canonical copy of its records and hands out clones,
/// assigns ids from a monotonic counter that never reuses a value, and keeps
/// each stored record's `id` equal to the key it is retrievable under. All
/// operations must be safe to call concurrently without caller-side locking.
/// `get_all_books` promises no ordering.
#[async_trait]
pub trait Database: Sync + Send {
    // resets the store to the empty state
    async fn initialize(&self) -> LibraryResult<()>;

    // every record currently held, in no particular order
    async fn get_all_books(&self) -> LibraryResult<Vec<Book>>;

    // fails with NotFound when the id is absent
    async fn get_book_by_id(&self, id: BookId) -> LibraryResult<Book>;

    // assigns the next id and stores the record under it
    async fn create_book(&self, book: &NewBook) -> LibraryResult<Book>;

    // replaces all fields of an existing record, preserving its id
    async fn update_book(&self, id: BookId, book: &NewBook) -> LibraryResult<Book>;

    // removes a record and returns its last stored value
    async fn delete_book(&self, id: BookId) -> LibraryResult<Book>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(RepositoryStore::InMemory),
            other => Err(LibraryError::validation(
                format!("unsupported book store {:?}", other).as_str(), Some("BOOKS_STORE".to_string()))),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}
