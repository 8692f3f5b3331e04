use std::sync::Arc;
use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};
use crate::books::domain::model::{Book, BookId, NewBook};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::patch_book_cmd::{PatchBookCommand, PatchBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::repository::Database;

pub(crate) type BooksSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub(crate) fn build_schema(database: Arc<dyn Database>) -> BooksSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(database)
        .finish()
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Book")]
pub(crate) struct BookObject {
    #[graphql(name = "ID")]
    id: BookId,
    #[graphql(name = "Title")]
    title: String,
    #[graphql(name = "Author")]
    author: String,
    #[graphql(name = "DatePublished")]
    date_published: String,
    #[graphql(name = "BookCoverURL")]
    cover_url: String,
}

impl From<Book> for BookObject {
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

fn database(ctx: &Context<'_>) -> async_graphql::Result<Arc<dyn Database>> {
    ctx.data::<Arc<dyn Database>>().map(Arc::clone)
}

pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<BookObject>> {
        let res = ListBooksCommand::new(database(ctx)?).execute(ListBooksCommandRequest::default()).await?;
        Ok(res.books.into_iter().map(BookObject::from).collect())
    }

    /// Resolves to null when `id` is omitted or no such book exists.
    async fn book(&self, ctx: &Context<'_>, id: Option<BookId>) -> async_graphql::Result<Option<BookObject>> {
        let Some(book_id) = id else {
            return Ok(None);
        };
        match GetBookCommand::new(database(ctx)?).execute(GetBookCommandRequest::new(book_id)).await {
            Ok(res) => Ok(Some(BookObject::from(res.book))),
            Err(CommandError::NotFound { .. }) => Ok(None),
            Err(err) => {
                tracing::error!(error = ?err, "graphql book query failed");
                Err(err.into())
            }
        }
    }
}

pub(crate) struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Title")] title: String,
        #[graphql(name = "Author")] author: String,
        #[graphql(name = "DatePublished")] date_published: String,
        #[graphql(name = "BookCoverURL")] cover_url: String,
    ) -> async_graphql::Result<BookObject> {
        let book = NewBook { title, author, date_published, cover_url };
        let res = AddBookCommand::new(database(ctx)?).execute(AddBookCommandRequest::new(book)).await?;
        Ok(BookObject::from(res.book))
    }

    /// Omitted arguments leave the stored field unchanged.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "ID")] id: BookId,
        #[graphql(name = "Title")] title: Option<String>,
        #[graphql(name = "Author")] author: Option<String>,
        #[graphql(name = "DatePublished")] date_published: Option<String>,
        #[graphql(name = "BookCoverURL")] cover_url: Option<String>,
    ) -> async_graphql::Result<BookObject> {
        let req = PatchBookCommandRequest { book_id: id, title, author, date_published, cover_url };
        let res = PatchBookCommand::new(database(ctx)?).execute(req).await.map_err(|err| {
            tracing::warn!(id, error = %err, "graphql update rejected");
            err
        })?;
        Ok(BookObject::from(res.book))
    }

    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "ID")] id: BookId,
    ) -> async_graphql::Result<BookObject> {
        let res = RemoveBookCommand::new(database(ctx)?).execute(RemoveBookCommandRequest::new(id)).await.map_err(|err| {
            tracing::warn!(id, error = %err, "graphql delete rejected");
            err
        })?;
        Ok(BookObject::from(res.book))
    }
}
