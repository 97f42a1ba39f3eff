use crate::{
    ensaluti::handlers::{
        Credentials, MSG_MISSING_FIELDS, MSG_REGISTER_SUCCESS, MSG_STORE_ERROR, MSG_USER_EXISTS,
    },
    store::{Record, RegisterOutcome, Store},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Form};
use std::sync::Arc;
use tracing::{debug, error, instrument};

// axum handler for registration, rewrites the whole store file on success
#[instrument(skip(store, payload))]
pub async fn register(
    store: Extension<Arc<Store>>,
    payload: Option<Form<Credentials>>,
) -> impl IntoResponse {
    let creds: Credentials = match payload {
        Some(Form(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.to_string()),
    };

    if creds.username.is_empty() {
        error!("Missing username");

        return (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.to_string());
    }

    debug!("registration attempt for {}", creds.username);

    let record = Record {
        username: creds.username,
        password: creds.password,
    };

    match store.register(record).await {
        Ok(RegisterOutcome::Created) => {
            debug!("Registration successful");

            (StatusCode::OK, MSG_REGISTER_SUCCESS.to_string())
        }
        Ok(RegisterOutcome::AlreadyExists) => (StatusCode::OK, MSG_USER_EXISTS.to_string()),
        Err(e) => {
            error!("Error updating store: {:?}", e);

            (StatusCode::INTERNAL_SERVER_ERROR, MSG_STORE_ERROR.to_string())
        }
    }
}
