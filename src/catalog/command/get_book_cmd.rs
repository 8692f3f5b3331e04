use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

pub(crate) struct GetBookCommand {
    database: Arc<dyn Database>,
}

impl GetBookCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: BookId,
}

impl GetBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetBookCommandResponse {
    pub book: Book,
}

impl GetBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.database.get_book_by_id(req.book_id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
