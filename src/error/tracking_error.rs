use crate::common::*;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[doc = r#"
    Typed failure outcome of one `/update_data` request.

    The variants separate the cases the legacy implementation funneled into a
    single catch-all: a store that does not exist yet, a store whose document
    cannot be interpreted, plain I/O failures, remote API failures, persist
    failures and render failures.
"#]
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("data store is missing: {0}")]
    StoreMissing(String),
    #[error("data store is corrupt: {0}")]
    StoreCorrupt(String),
    #[error("data store I/O failed: {0}")]
    StoreIo(#[from] std::io::Error),
    #[error("remote store request failed: {0}")]
    RemoteApi(#[from] reqwest::Error),
    #[error("remote store rejected the request: {0}")]
    RemoteStore(String),
    #[error("failed to persist series: {0}")]
    Persist(String),
    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl IntoResponse for TrackingError {
    fn into_response(self) -> Response {
        error!("[TrackingError] {:?}", self);

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
