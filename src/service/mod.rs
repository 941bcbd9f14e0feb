//! BookService: book CRUD against the store; RequestValidator: body binding.

mod crud;
mod validation;
pub use crud::BookService;
pub use validation::{RequestValidator, RequiredFields};
