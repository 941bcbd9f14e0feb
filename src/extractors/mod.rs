//! Request extractors that reject with the standard error envelope.

mod book_id;
mod json;
pub use book_id::BookId;
pub use json::ValidJson;
