use crate::ensaluti::handlers::{MSG_NON_POST, MSG_NOT_FOUND};
use axum::{http::Method, http::StatusCode, response::IntoResponse};
use tracing::debug;

// axum fallback for every unrouted request: any non-POST method gets the
// fixed placeholder regardless of path, a POST to an unknown path gets 404
pub async fn fallback(method: Method) -> impl IntoResponse {
    debug!("fallback for {method}");

    if method == Method::POST {
        (StatusCode::NOT_FOUND, MSG_NOT_FOUND)
    } else {
        (StatusCode::OK, MSG_NON_POST)
    }
}
