use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

pub(crate) struct RemoveBookCommand {
    database: Arc<dyn Database>,
}

impl RemoveBookCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: BookId,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: Book,
}

impl RemoveBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.database.delete_book(req.book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}
