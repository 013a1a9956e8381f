use crate::error::{StoreError, StoreResult};
use crate::values::{timestamp, BookId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Caller-supplied book fields, as received on create and update.
///
/// Everything is optional at this stage; [`BookInput::validate`] enforces the
/// write rules and produces a [`BookDraft`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub name: Option<String>,
    /// Any JSON scalar; stored and echoed back as given.
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Integer or fractional JSON numbers; compared numerically.
    pub page_count: Option<Number>,
    pub read_page: Option<Number>,
    /// `null` and absent both mean not reading.
    #[serde(default)]
    pub reading: Option<bool>,
}

impl BookInput {
    /// Builder-style helper used mostly by tests and benches.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn pages(mut self, page_count: i64, read_page: i64) -> Self {
        self.page_count = Some(page_count.into());
        self.read_page = Some(read_page.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    /// Check the write rules in order: a non-empty name first, then
    /// `readPage <= pageCount`. A bound that was not supplied is not compared.
    pub fn validate(self) -> StoreResult<BookDraft> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(StoreError::MissingName),
        };
        if let (Some(read_page), Some(page_count)) = (&self.read_page, &self.page_count) {
            if as_f64(read_page) > as_f64(page_count) {
                return Err(StoreError::ReadPageExceedsPageCount {
                    read_page: read_page.clone(),
                    page_count: page_count.clone(),
                });
            }
        }
        Ok(BookDraft {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading.unwrap_or(false),
        })
    }
}

/// Numeric value of a JSON number, so `10` and `10.0` compare equal.
fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Book fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    name: String,
    year: Option<Value>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: Option<Number>,
    read_page: Option<Number>,
    reading: bool,
}

impl BookDraft {
    fn finished(&self) -> bool {
        match (&self.page_count, &self.read_page) {
            (Some(page_count), Some(read_page)) => as_f64(page_count) == as_f64(read_page),
            (None, None) => true,
            _ => false,
        }
    }
}

/// A stored book record.
///
/// `id` and `inserted_at` never change after creation. `finished` is derived
/// from the page counters every time the record is written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    name: String,
    year: Option<Value>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: Option<Number>,
    read_page: Option<Number>,
    finished: bool,
    reading: bool,
    #[serde(with = "timestamp")]
    inserted_at: Timestamp,
    #[serde(with = "timestamp")]
    updated_at: Timestamp,
}

impl Book {
    pub fn new(id: BookId, draft: BookDraft, now: Timestamp) -> Self {
        let finished = draft.finished();
        Self {
            id,
            name: draft.name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller field, keeping `id` and `inserted_at`.
    pub fn replace(&mut self, draft: BookDraft, now: Timestamp) {
        let mut next = Self::new(self.id.clone(), draft, now);
        next.inserted_at = self.inserted_at;
        *self = next;
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> Option<&Value> {
        self.year.as_ref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn page_count(&self) -> Option<&Number> {
        self.page_count.as_ref()
    }

    pub fn read_page(&self) -> Option<&Number> {
        self.read_page.as_ref()
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn reading(&self) -> bool {
        self.reading
    }

    pub fn inserted_at(&self) -> Timestamp {
        self.inserted_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The lightweight `{id, name, publisher}` view used by listings.
    pub fn as_summary(&self) -> BookSummary<'_> {
        BookSummary {
            id: &self.id,
            name: &self.name,
            publisher: self.publisher.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookSummary<'a> {
    pub id: &'a BookId,
    pub name: &'a str,
    pub publisher: Option<&'a str>,
}
