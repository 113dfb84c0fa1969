pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-exports
pub use domain::{Bookshelf, LibraryError, ReadingRecord, ReadingStats, ReadingStatus};
