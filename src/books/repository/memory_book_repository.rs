use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId, NewBook};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Database;

struct BookTable {
    books: HashMap<BookId, Book>,
    next_id: BookId,
}

impl BookTable {
    fn allocate_id(&mut self) -> LibraryResult<BookId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| LibraryError::database(
            "book id counter exhausted"))?;
        Ok(id)
    }
}

// InMemoryDatabase keeps book records in a process-local map. One lock guards
// both the records and the id counter and is held for the whole of each call.
// initialize() drops all records but keeps the counter, so an id is never
// handed out twice by the same instance.
pub(crate) struct InMemoryDatabase {
    table: Mutex<BookTable>,
}

impl InMemoryDatabase {
    pub(crate) fn new() -> Self {
        Self {
            table: Mutex::new(BookTable {
                books: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, BookTable>> {
        self.table.lock().map_err(|_| LibraryError::database(
            "in-memory book table lock poisoned"))
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn initialize(&self) -> LibraryResult<()> {
        let mut table = self.lock()?;
        tracing::debug!(dropped = table.books.len(), next_id = table.next_id, "initializing book table");
        table.books.clear();
        Ok(())
    }

    async fn get_all_books(&self) -> LibraryResult<Vec<Book>> {
        let table = self.lock()?;
        tracing::debug!(count = table.books.len(), "listing books");
        Ok(table.books.values().cloned().collect())
    }

    async fn get_book_by_id(&self, id: BookId) -> LibraryResult<Book> {
        tracing::debug!(id, "getting book");
        let table = self.lock()?;
        table.books.get(&id).cloned().ok_or_else(|| LibraryError::book_not_found(id))
    }

    async fn create_book(&self, book: &NewBook) -> LibraryResult<Book> {
        let mut table = self.lock()?;
        let id = table.allocate_id()?;
        let stored = book.with_id(id);
        table.books.insert(id, stored.clone());
        tracing::debug!(id, title = stored.title.as_str(), "created book");
        Ok(stored)
    }

    async fn update_book(&self, id: BookId, book: &NewBook) -> LibraryResult<Book> {
        tracing::debug!(id, "updating book");
        let mut table = self.lock()?;
        match table.books.get_mut(&id) {
            Some(existing) => {
                *existing = book.with_id(id);
                Ok(existing.clone())
            }
            None => {
                tracing::debug!(id, "book to update was not found");
                Err(LibraryError::book_not_found(id))
            }
        }
    }

    async fn delete_book(&self, id: BookId) -> LibraryResult<Book> {
        tracing::debug!(id, "deleting book");
        let mut table = self.lock()?;
        table.books.remove(&id).ok_or_else(|| {
            tracing::debug!(id, "book to delete was not found");
            LibraryError::book_not_found(id)
        })
    }
}
