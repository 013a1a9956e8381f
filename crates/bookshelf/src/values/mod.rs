pub mod flag;
pub mod id;
pub mod timestamp;

pub use flag::FlagValue;
pub use id::BookId;
pub use timestamp::Timestamp;
