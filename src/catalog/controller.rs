use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::books::domain::model::BookId;
use crate::books::dto::{BookDto, BookFieldsDto};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    tracing::debug!(branch = state.config.branch_id.as_str(), "listing books");
    let res = ListBooksCommand::new(state.database).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res.books.into_iter().map(BookDto::from).collect()))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let fields: BookFieldsDto = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    tracing::debug!(branch = state.config.branch_id.as_str(), title = fields.title.as_str(), "book to be created");
    let req = AddBookCommandRequest::new(fields.into());
    let res = AddBookCommand::new(state.database).execute(req).await?;
    Ok((StatusCode::CREATED, Json(BookDto::from(res.book))))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>) -> Result<Json<BookDto>, ServerError> {
    tracing::debug!(branch = state.config.branch_id.as_str(), book_id, "finding book");
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.database).execute(req).await?;
    Ok(Json(BookDto::from(res.book)))
}

// Full replace: every field must be present in the body.
pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    body: Bytes) -> Result<Json<BookDto>, ServerError> {
    let fields: BookFieldsDto = serde_json::from_slice(&body).map_err(json_to_server_error)?;
    tracing::debug!(branch = state.config.branch_id.as_str(), book_id, "book to be replaced");
    let req = UpdateBookCommandRequest::new(book_id, fields.into());
    let res = UpdateBookCommand::new(state.database).execute(req).await?;
    Ok(Json(BookDto::from(res.book)))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>) -> Result<Json<BookDto>, ServerError> {
    tracing::debug!(branch = state.config.branch_id.as_str(), book_id, "book to be removed");
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.database).execute(req).await?;
    Ok(Json(BookDto::from(res.book)))
}
