use serde::{Deserialize, Serialize};
use crate::books::domain::model::{Book, BookId, NewBook};

// BookDto is the JSON shape of a book record on the REST surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub date_published: String,
    #[serde(rename = "coverURL")]
    pub cover_url: String,
}

// BookFieldsDto is a request body for create and full replace. Every field is
// required and an `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookFieldsDto {
    pub title: String,
    pub author: String,
    pub date_published: String,
    #[serde(rename = "coverURL")]
    pub cover_url: String,
}

impl From<Book> for BookDto {
    fn from(other: Book) -> Self {
        Self {
            id: other.id,
            title: other.title,
            author: other.author,
            date_published: other.date_published,
            cover_url: other.cover_url,
        }
    }
}

impl From<BookFieldsDto> for NewBook {
    fn from(other: BookFieldsDto) -> Self {
        Self {
            title: other.title,
            author: other.author,
            date_published: other.date_published,
            cover_url: other.cover_url,
        }
    }
}
