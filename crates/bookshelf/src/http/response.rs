use crate::error::{ErrorKind, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::borrow::Cow;

/// Client-visible message texts.
pub mod messages {
    pub const BOOK_ADDED: &str = "Buku berhasil ditambahkan";
    pub const BOOK_UPDATED: &str = "Buku berhasil diperbarui";
    pub const BOOK_DELETED: &str = "Buku berhasil dihapus";

    pub const ADD_MISSING_NAME: &str = "Gagal menambahkan buku. Mohon isi nama buku";
    pub const ADD_READ_PAGE: &str =
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount";
    pub const ADD_FAILED: &str = "Buku gagal ditambahkan";

    pub const BOOK_NOT_FOUND: &str = "Buku tidak ditemukan";

    pub const UPDATE_MISSING_NAME: &str = "Gagal memperbarui buku. Mohon isi nama buku";
    pub const UPDATE_READ_PAGE: &str =
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount";
    pub const UPDATE_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";

    pub const DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";

    pub const ROUTE_NOT_FOUND: &str = "Not Found";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// The `{status, message?, data?}` object every response carries.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// A successful reply: status code plus a `success` envelope.
#[derive(Debug)]
pub struct ApiReply<T> {
    code: StatusCode,
    body: Envelope<T>,
}

impl<T> ApiReply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK,
            body: Envelope {
                status: Status::Success,
                message: None,
                data: Some(data),
            },
        }
    }

    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            code: StatusCode::CREATED,
            body: Envelope {
                status: Status::Success,
                message: Some(Cow::Borrowed(message)),
                data: Some(data),
            },
        }
    }
}

impl ApiReply<()> {
    pub fn message(message: &'static str) -> Self {
        Self {
            code: StatusCode::OK,
            body: Envelope {
                status: Status::Success,
                message: Some(Cow::Borrowed(message)),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}

/// The store operation a request was serving; decides failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self, err: &StoreError) -> Cow<'static, str> {
        use self::messages::*;
        let text = match (self, err) {
            (Self::Create, StoreError::MissingName) => ADD_MISSING_NAME,
            (Self::Create, StoreError::ReadPageExceedsPageCount { .. }) => ADD_READ_PAGE,
            (Self::Create, _) => ADD_FAILED,
            (Self::Update, StoreError::MissingName) => UPDATE_MISSING_NAME,
            (Self::Update, StoreError::ReadPageExceedsPageCount { .. }) => UPDATE_READ_PAGE,
            (Self::Update, StoreError::BookNotFound(_)) => UPDATE_NOT_FOUND,
            (Self::Get, StoreError::BookNotFound(_)) => BOOK_NOT_FOUND,
            (Self::Delete, StoreError::BookNotFound(_)) => DELETE_NOT_FOUND,
            _ => return Cow::Owned(err.to_string()),
        };
        Cow::Borrowed(text)
    }
}

/// A failed reply: status code plus a `fail` envelope with a message.
#[derive(Debug)]
pub struct ApiError {
    code: StatusCode,
    message: Cow<'static, str>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn from_store(op: Operation, err: &StoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(code, op.failure_message(err))
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope::<()> {
            status: Status::Fail,
            message: Some(self.message),
            data: None,
        };
        (self.code, Json(body)).into_response()
    }
}
