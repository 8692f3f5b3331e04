use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{Book, NewBook};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

pub(crate) struct AddBookCommand {
    database: Arc<dyn Database>,
}

impl AddBookCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: NewBook,
}

impl AddBookCommandRequest {
    pub fn new(book: NewBook) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandResponse {
    pub book: Book,
}

impl AddBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.database.create_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
