use super::response::{messages, ApiError, ApiReply, Operation};
use super::AppState;
use crate::book::{Book, BookInput, BookSummary};
use crate::filter::ListFilter;
use crate::values::BookId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreated {
    pub book_id: BookId,
}

#[derive(Debug, Serialize)]
pub struct BookList<'a> {
    pub books: Vec<BookSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BookDetail<'a> {
    pub book: &'a Book,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub version: &'static str,
    pub books: usize,
}

fn read_payload(
    op: Operation,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<BookInput, ApiError> {
    payload.map(|Json(input)| input).map_err(|rejection| {
        warn!(?op, error = %rejection, "unreadable book payload");
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    })
}

/// `POST /books`
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<ApiReply<BookCreated>, ApiError> {
    let input = read_payload(Operation::Create, payload)?;
    let book_id = state
        .store
        .write()
        .await
        .create(input)
        .map_err(|err| ApiError::from_store(Operation::Create, &err))?;
    Ok(ApiReply::created(messages::BOOK_ADDED, BookCreated { book_id }))
}

/// `GET /books?name=..&reading=..&finished=..`
///
/// Read as raw pairs so a repeated key never rejects the request.
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let filter = ListFilter::from_pairs(pairs);
    let store = state.store.read().await;
    let books = store.list(&filter).collect();
    ApiReply::ok(BookList { books }).into_response()
}

/// `GET /books/{bookId}`
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Response, ApiError> {
    let store = state.store.read().await;
    let book = store
        .get(&book_id)
        .map_err(|err| ApiError::from_store(Operation::Get, &err))?;
    Ok(ApiReply::ok(BookDetail { book }).into_response())
}

/// `PUT /books/{bookId}`
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<ApiReply<()>, ApiError> {
    let input = read_payload(Operation::Update, payload)?;
    state
        .store
        .write()
        .await
        .update(&book_id, input)
        .map_err(|err| ApiError::from_store(Operation::Update, &err))?;
    Ok(ApiReply::message(messages::BOOK_UPDATED))
}

/// `DELETE /books/{bookId}`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<ApiReply<()>, ApiError> {
    state
        .store
        .write()
        .await
        .delete(&book_id)
        .map_err(|err| ApiError::from_store(Operation::Delete, &err))?;
    Ok(ApiReply::message(messages::BOOK_DELETED))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> ApiReply<Health> {
    let books = state.store.read().await.len();
    ApiReply::ok(Health {
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}

pub async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
}
