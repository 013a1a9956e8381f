//! HTTP binding for the book store.
//!
//! - `GET    /health`
//! - `POST   /books`
//! - `GET    /books?name=..&reading=..&finished=..`
//! - `GET    /books/{bookId}`
//! - `PUT    /books/{bookId}`
//! - `DELETE /books/{bookId}`
//!
//! Every response body is a `{status, message?, data?}` JSON envelope.

pub mod handlers;
pub mod response;

use crate::store::BookStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use response::{ApiError, ApiReply, Envelope, Operation, Status};

/// Shared server state. The single lock makes every store operation atomic
/// with respect to the others.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RwLock<BookStore>>,
}

impl AppState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookStore::new())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/{bookId}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
