pub mod errors;
pub mod formatting;
pub mod records;
pub mod shelf;
pub mod stats;

// Re-exports
pub use errors::LibraryError;
pub use records::{ReadingRecord, ReadingStatus};
pub use shelf::Bookshelf;
pub use stats::ReadingStats;
