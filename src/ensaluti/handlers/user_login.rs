use crate::{
    ensaluti::handlers::{
        Credentials, MSG_INCORRECT_PASSWORD, MSG_LOGIN_SUCCESS, MSG_MISSING_FIELDS,
        MSG_NO_CREDENTIALS, MSG_STORE_ERROR, MSG_USERNAME_NOT_FOUND,
    },
    store::Store,
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Form};
use std::sync::Arc;
use tracing::{debug, error, instrument};

// axum handler for login, never mutates the store
#[instrument(skip(store, payload))]
pub async fn login(
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

    debug!("login attempt for {}", creds.username);

    let records = match store.records().await {
        Ok(records) => records,
        Err(e) => {
            error!("Error reading store: {:?}", e);

            return (StatusCode::INTERNAL_SERVER_ERROR, MSG_STORE_ERROR.to_string());
        }
    };

    if records.is_empty() {
        debug!("Store is empty");

        return (StatusCode::OK, MSG_NO_CREDENTIALS.to_string());
    }

    // linear scan, case-sensitive string equality on both fields
    match records.iter().find(|r| r.username == creds.username) {
        Some(record) if record.password == creds.password => {
            debug!("Login successful");

            (StatusCode::OK, MSG_LOGIN_SUCCESS.to_string())
        }
        Some(_) => (StatusCode::OK, MSG_INCORRECT_PASSWORD.to_string()),
        None => (StatusCode::OK, MSG_USERNAME_NOT_FOUND.to_string()),
    }
}
