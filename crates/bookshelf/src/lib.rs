pub mod book;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod store;
pub mod values;

pub use book::{Book, BookDraft, BookInput, BookSummary};
pub use clock::{Clock, SystemClock};
pub use config::ServerConfig;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use filter::{BookFilter, ListFilter};
pub use http::{router, AppState};
pub use store::BookStore;
pub use values::{BookId, FlagValue, Timestamp};
