use super::components::{self, Component};
use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database can't be reached at all: connection refused, TLS
    /// failure, or the pool gave up waiting.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),
    #[error("memo {id} has malformed date {value:?}")]
    MalformedDate {
        id: Uuid,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Database(sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::StorageUnavailable(err),
            other => Self::Database(other),
        }
    }
}

#[derive(Debug)]
pub enum ServerError {
    /// The request itself was wrong; the message is shown to the user.
    BadRequest(String),
    Internal(Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                log::debug!("bad request: {message}");
                (
                    StatusCode::BAD_REQUEST,
                    components::Page {
                        title: "Bad request".to_string(),
                        children: Box::new(components::BadRequest { message }),
                    }
                    .render(),
                )
                    .into_response()
            }
            Self::Internal(err) => {
                log::error!("{err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
                    .into_response()
            }
        }
    }
}

// This enables using `?` on functions that return `Result<_, anyhow::Error>`
// (or any error anyhow can hold, like `StoreError`) to turn them into
// `Result<_, ServerError>`.
impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
