//! Browser-facing HTTP surface over a shared [`ContactStore`].
//!
//! ## Routes
//!
//! - `GET /` index page.
//! - `GET|POST /add` add form, then redirect to `/view`.
//! - `GET /view` every contact in order.
//! - `GET|POST /search` look up the first contact with a name.
//! - `GET|POST /delete` delete the first contact with a name.
//! - `GET|POST /update` edit or rename a contact, then redirect to `/view`.

pub mod handlers;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::domain::ContactStore;

/// Build the axum `Router` for the directory pages.
pub fn router(store: Arc<ContactStore>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/add", get(handlers::add_form).post(handlers::add))
        .route("/view", get(handlers::view))
        .route("/search", get(handlers::search_form).post(handlers::search))
        .route("/delete", get(handlers::delete_form).post(handlers::delete))
        .route("/update", get(handlers::update_form).post(handlers::update))
        .with_state(store)
}

/// Serve the directory over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve(store: Arc<ContactStore>, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        medium = store.get_medium(),
        "server starting"
    );

    axum::serve(listener, router(store)).await
}
