//! Shared application state for all routes. Built once at startup and handed to the router.

use crate::service::BookService;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub books: BookService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            books: BookService::new(pool),
        }
    }
}
