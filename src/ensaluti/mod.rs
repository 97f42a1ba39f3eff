use crate::store::Store;
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Request},
    routing::post,
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    set_header::{SetRequestHeaderLayer, SetResponseHeaderLayer},
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;

pub mod handlers;

/// Build the application router around a shared store.
#[must_use]
pub fn router(store: Arc<Store>) -> Router {
    // the method routers carry the fallback too, so a non-POST request to a
    // registered path gets the placeholder instead of a bare 405
    Router::new()
        .route("/login", post(handlers::login).fallback(handlers::fallback))
        .route(
            "/register",
            post(handlers::register).fallback(handlers::fallback),
        )
        .fallback(handlers::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                // every response carries the wildcard CORS header
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(Extension(store)),
        )
}

/// Bind and serve until ctrl-c.
/// # Errors
/// Returns an error if the server fails to start
pub async fn new(port: u16, store: Store) -> Result<()> {
    let app = router(Arc::new(store));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}
