use crate::book::{Book, BookInput, BookSummary};
use crate::clock::{Clock, SystemClock};
use crate::error::{StoreError, StoreResult};
use crate::filter::ListFilter;
use crate::values::BookId;
use std::fmt;
use tracing::{debug, error, info, warn};

/// In-memory, insertion-ordered collection of books.
///
/// Owns the records and enforces the write rules: a non-empty name and
/// `readPage <= pageCount`. Ids are unique for the life of the store.
/// Writes take `&mut self`; callers sharing a store across tasks wrap it in
/// a single lock so every operation is atomic.
pub struct BookStore<C = SystemClock> {
    books: Vec<Book>,
    clock: C,
}

impl BookStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for BookStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books.len())
            .finish_non_exhaustive()
    }
}

impl<C: Clock> BookStore<C> {
    /// Create an empty store that stamps records with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            books: Vec::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over all books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Validate `input` and append a new book, returning its generated id.
    pub fn create(&mut self, input: BookInput) -> StoreResult<BookId> {
        let draft = input.validate().inspect_err(|err| {
            warn!(error = %err, "rejected new book");
        })?;

        let id = self.fresh_id();
        let book = Book::new(id.clone(), draft, self.clock.now());
        self.books.push(book);

        if !self.contains(id.as_str()) {
            error!(book_id = %id, "book missing right after insert");
            return Err(StoreError::Internal(format!("book {id} was not stored")));
        }
        info!(book_id = %id, total = self.books.len(), "book created");
        Ok(id)
    }

    /// Summaries of the books matching `filter`, in insertion order.
    ///
    /// The sequence is built lazily from the underlying collection.
    pub fn list(&self, filter: &ListFilter) -> impl Iterator<Item = BookSummary<'_>> + '_ {
        let filter = filter.select();
        debug!(?filter, "listing books");
        self.books
            .iter()
            .filter(move |book| filter.matches(book))
            .map(Book::as_summary)
    }

    pub fn get(&self, id: &str) -> StoreResult<&Book> {
        let found = self.books.iter().find(|book| book.id() == id);
        if found.is_none() {
            debug!(book_id = id, "book lookup missed");
        }
        found.ok_or_else(|| StoreError::BookNotFound(id.to_owned()))
    }

    /// Replace every caller field of an existing book.
    ///
    /// Input is validated before the lookup, so an invalid payload reports a
    /// validation error even when `id` does not exist.
    pub fn update(&mut self, id: &str, input: BookInput) -> StoreResult<&Book> {
        let draft = input.validate().inspect_err(|err| {
            warn!(book_id = id, error = %err, "rejected book update");
        })?;

        let index = self
            .position(id)
            .ok_or_else(|| StoreError::BookNotFound(id.to_owned()))?;
        let now = self.clock.now();
        let book = &mut self.books[index];
        book.replace(draft, now);
        info!(book_id = id, "book updated");
        Ok(&*book)
    }

    /// Remove a book, returning it. Remaining books keep their order.
    pub fn delete(&mut self, id: &str) -> StoreResult<Book> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::BookNotFound(id.to_owned()))?;
        let removed = self.books.remove(index);
        info!(book_id = id, total = self.books.len(), "book deleted");
        Ok(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    fn fresh_id(&self) -> BookId {
        loop {
            let id = BookId::generate();
            if !self.contains(id.as_str()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Timestamp;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    /// A clock that advances one second every time it is read.
    fn ticking_clock() -> impl Fn() -> Timestamp {
        let ticks = Arc::new(AtomicI64::new(0));
        move || {
            let secs = ticks.fetch_add(1, Ordering::SeqCst);
            Utc.timestamp_opt(1_700_000_000 + secs, 0).single().unwrap()
        }
    }

    fn names<'a>(summaries: impl Iterator<Item = BookSummary<'a>>) -> Vec<&'a str> {
        summaries.map(|s| s.name).collect()
    }

    fn seeded() -> BookStore {
        let mut store = BookStore::new();
        store
            .create(BookInput::named("Harry Potter").pages(300, 300))
            .unwrap();
        store
            .create(BookInput::named("Dune").pages(412, 20).reading(true))
            .unwrap();
        store
            .create(BookInput::named("The Hobbit").pages(310, 0))
            .unwrap();
        store
    }

    #[test]
    fn test_create_and_get() {
        let mut store = BookStore::new();
        let id = store
            .create(BookInput::named("A").pages(100, 100).publisher("Dicoding"))
            .unwrap();

        let book = store.get(id.as_str()).unwrap();
        assert_eq!(book.name(), "A");
        assert_eq!(book.publisher(), Some("Dicoding"));
        assert!(book.finished());
        assert_eq!(book.inserted_at(), book.updated_at());
    }

    #[test]
    fn test_create_unfinished() {
        let mut store = BookStore::new();
        let id = store.create(BookInput::named("B").pages(100, 50)).unwrap();
        assert!(!store.get(id.as_str()).unwrap().finished());
    }

    #[test]
    fn test_create_rejects_invalid_input_without_mutation() {
        let mut store = BookStore::new();
        assert_eq!(
            store.create(BookInput::default().pages(10, 1)),
            Err(StoreError::MissingName)
        );
        assert!(matches!(
            store.create(BookInput::named("A").pages(10, 11)),
            Err(StoreError::ReadPageExceedsPageCount { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = BookStore::new();
        let a = store.create(BookInput::named("A")).unwrap();
        let b = store.create(BookInput::named("A")).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_without_filter_keeps_insertion_order() {
        let store = seeded();
        assert_eq!(
            names(store.list(&ListFilter::default())),
            vec!["Harry Potter", "Dune", "The Hobbit"]
        );
    }

    #[test]
    fn test_list_by_name() {
        let store = seeded();
        assert_eq!(names(store.list(&ListFilter::by_name("ar"))), vec!["Harry Potter"]);
        assert_eq!(
            names(store.list(&ListFilter::by_name("THE"))),
            vec!["The Hobbit"]
        );
        assert!(store.list(&ListFilter::by_name("zzz")).next().is_none());
    }

    #[test]
    fn test_list_by_reading_and_finished() {
        let store = seeded();
        assert_eq!(names(store.list(&ListFilter::by_reading("1"))), vec!["Dune"]);
        assert_eq!(
            names(store.list(&ListFilter::by_reading("0"))),
            vec!["Harry Potter", "The Hobbit"]
        );
        assert_eq!(
            names(store.list(&ListFilter::by_finished("1"))),
            vec!["Harry Potter"]
        );
        assert_eq!(
            names(store.list(&ListFilter::by_finished("0"))),
            vec!["Dune", "The Hobbit"]
        );
    }

    #[test]
    fn test_name_filter_ignores_reading_filter() {
        let store = seeded();
        let filter = ListFilter {
            name: Some("ar".into()),
            reading: Some("1".into()),
            finished: None,
        };
        assert_eq!(names(store.list(&filter)), vec!["Harry Potter"]);
    }

    #[test]
    fn test_get_missing_fails() {
        let store = seeded();
        assert_eq!(
            store.get("nonexistent"),
            Err(StoreError::BookNotFound("nonexistent".into()))
        );
    }

    #[test]
    fn test_update_replaces_fields_and_bumps_updated_at() {
        let mut store = BookStore::with_clock(ticking_clock());
        let id = store
            .create(BookInput::named("Draft").pages(100, 10).publisher("Old"))
            .unwrap();
        let inserted_at = store.get(id.as_str()).unwrap().inserted_at();

        let updated = store
            .update(id.as_str(), BookInput::named("Final").pages(100, 100))
            .unwrap();
        assert_eq!(updated.name(), "Final");
        assert_eq!(updated.publisher(), None);
        assert!(updated.finished());
        assert_eq!(updated.inserted_at(), inserted_at);
        assert!(updated.updated_at() > inserted_at);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = seeded();
        let dune = store.iter().nth(1).unwrap().id().clone();
        store
            .update(dune.as_str(), BookInput::named("Dune Messiah"))
            .unwrap();
        assert_eq!(
            names(store.list(&ListFilter::default())),
            vec!["Harry Potter", "Dune Messiah", "The Hobbit"]
        );
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let mut store = seeded();
        assert_eq!(
            store.update("nonexistent", BookInput::default()),
            Err(StoreError::MissingName)
        );
        assert!(matches!(
            store.update("nonexistent", BookInput::named("X").pages(1, 2)),
            Err(StoreError::ReadPageExceedsPageCount { .. })
        ));
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let mut store = seeded();
        let before: Vec<Book> = store.iter().cloned().collect();
        assert_eq!(
            store.update("nonexistent", BookInput::named("X")),
            Err(StoreError::BookNotFound("nonexistent".into()))
        );
        let after: Vec<Book> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = seeded();
        let dune = store.iter().nth(1).unwrap().id().clone();

        let removed = store.delete(dune.as_str()).unwrap();
        assert_eq!(removed.name(), "Dune");
        assert_eq!(store.len(), 2);
        assert!(store.get(dune.as_str()).is_err());
        assert_eq!(
            names(store.list(&ListFilter::default())),
            vec!["Harry Potter", "The Hobbit"]
        );
    }

    #[test]
    fn test_delete_missing_fails() {
        let mut store = seeded();
        assert!(store.delete("nonexistent").is_err());
        assert_eq!(store.len(), 3);
    }
}
