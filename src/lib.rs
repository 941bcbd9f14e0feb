//! Library API: REST CRUD over a single `books` table, with a uniform
//! `{status, message, data?}` envelope on every response.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use models::{Book, CreateBook, UpdateBook};
pub use response::Envelope;
pub use routes::{app, book_routes, common_routes_with_ready};
pub use service::BookService;
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_books_table};
