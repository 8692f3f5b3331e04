use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId, NewBook};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

// UpdateBookCommand replaces every field of an existing book in one store call.
pub(crate) struct UpdateBookCommand {
    database: Arc<dyn Database>,
}

impl UpdateBookCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: BookId,
    pub book: NewBook,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: BookId, book: NewBook) -> Self {
        Self {
            book_id,
            book,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: Book,
}

impl UpdateBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.database.update_book(req.book_id, &req.book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
