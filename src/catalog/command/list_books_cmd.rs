use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

pub(crate) struct ListBooksCommand {
    database: Arc<dyn Database>,
}

impl ListBooksCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<Book>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.database.get_all_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::NewBook;
    use crate::books::factory::create_database;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::core::command::Command;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let db = create_database(RepositoryStore::InMemory).await.expect("should create store");
        let cmd = ListBooksCommand::new(db.clone());
        assert!(cmd.execute(ListBooksCommandRequest::default()).await.expect("should list").books.is_empty());

        let _ = db.create_book(&NewBook::new("Dune", "Herbert", "1965", "u")).await.expect("should create");
        let _ = db.create_book(&NewBook::new("Emma", "Austen", "1815", "u")).await.expect("should create");
        let res = cmd.execute(ListBooksCommandRequest::default()).await.expect("should list");
        assert_eq!(2, res.books.len());
    }
}
