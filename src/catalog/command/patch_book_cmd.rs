use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::{Book, BookId, NewBook};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

// PatchBookCommand merges the supplied fields over the stored record and writes
// the result back as a full replace. Absent fields keep their stored value.
// The read and the write are two store calls, so a concurrent delete between
// them is reported as NotFound by the write.
pub(crate) struct PatchBookCommand {
    database: Arc<dyn Database>,
}

impl PatchBookCommand {
    pub(crate) fn new(database: Arc<dyn Database>) -> Self {
        Self {
            database,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PatchBookCommandRequest {
    pub book_id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub cover_url: Option<String>,
}

impl PatchBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            ..Default::default()
        }
    }

    pub fn merge_into(self, existing: &Book) -> NewBook {
        let mut book = NewBook::from(existing);
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(date_published) = self.date_published {
            book.date_published = date_published;
        }
        if let Some(cover_url) = self.cover_url {
            book.cover_url = cover_url;
        }
        book
    }
}

#[derive(Debug)]
pub(crate) struct PatchBookCommandResponse {
    pub book: Book,
}

impl PatchBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<PatchBookCommandRequest, PatchBookCommandResponse> for PatchBookCommand {
    async fn execute(&self, req: PatchBookCommandRequest) -> Result<PatchBookCommandResponse, CommandError> {
        let book_id = req.book_id;
        let existing = self.database.get_book_by_id(book_id).await?;
        let merged = req.merge_into(&existing);
        self.database.update_book(book_id, &merged).await.map_err(CommandError::from).map(PatchBookCommandResponse::new)
    }
}
