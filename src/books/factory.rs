use std::sync::Arc;
use crate::books::repository::memory_book_repository::InMemoryDatabase;
use crate::core::library::LibraryResult;
use crate::core::repository::{Database, RepositoryStore};

// Builds the configured backend and brings it to its initialized empty state.
pub(crate) async fn create_database(store: RepositoryStore) -> LibraryResult<Arc<dyn Database>> {
    let db: Arc<dyn Database> = match store {
        RepositoryStore::InMemory => {
            Arc::new(InMemoryDatabase::new())
        }
    };
    db.initialize().await?;
    tracing::info!(store = %store, "book store initialized");
    Ok(db)
}
