use std::sync::Arc;
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::Database;
use crate::graphql::schema::{build_schema, BooksSchema};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) database: Arc<dyn Database>,
    pub(crate) schema: BooksSchema,
}

impl AppState {
    pub fn new(config: Configuration, database: Arc<dyn Database>) -> AppState {
        let schema = build_schema(database.clone());
        AppState {
            config,
            database,
            schema,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    tracing::warn!(error = %err, "rejecting malformed book payload");
    (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            tracing::error!(error = ?err, "book request failed");
        } else {
            tracing::warn!(error = %err, status = status.as_u16(), "book request rejected");
        }
        (status, err.to_string())
    }
}
