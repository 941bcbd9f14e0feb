//! Book handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{BookId, ValidJson};
use crate::models::{CreateBook, UpdateBook};
use crate::response::{success, success_empty};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateBook>,
) -> Result<impl IntoResponse, AppError> {
    let id = state
        .books
        .insert(&body)
        .await
        .map_err(AppError::store("Error inserting book to db"))?;
    tracing::info!(id, "book created");
    Ok(success_empty(StatusCode::CREATED, "book created successfully"))
}

/// GET /api/v1/books
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state
        .books
        .list()
        .await
        .map_err(AppError::store("An error occurred while fetching the books"))?;
    tracing::info!(count = books.len(), "books listed");
    Ok(success(StatusCode::OK, "books fetched successfully", books))
}

/// GET /api/v1/books/:id
pub async fn read(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let book = state
        .books
        .find(id)
        .await
        .map_err(AppError::store("An error occurred while fetching the book"))?
        .ok_or_else(|| AppError::NotFound(format!("No such book with id {}", id)))?;
    tracing::info!(id, "book fetched");
    Ok(success(StatusCode::OK, "successfully fetched the book", book))
}

/// PUT /api/v1/books/:id. Title and author only; responds with the re-fetched row.
pub async fn update(
    State(state): State<AppState>,
    BookId(id): BookId,
    ValidJson(body): ValidJson<UpdateBook>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .books
        .update(id, &body)
        .await
        .map_err(AppError::store("error updating book details in database"))?;
    if affected == 0 {
        return Err(AppError::BadRequest(format!("No such book with id {}", id)));
    }

    // A concurrent delete between the two statements also lands here.
    let book = state
        .books
        .find(id)
        .await
        .and_then(|found| found.ok_or(sqlx::Error::RowNotFound))
        .map_err(AppError::store("Error returning updated book from db"))?;
    tracing::info!(id, "book updated");
    Ok(success(StatusCode::OK, "Book updated successfully", book))
}

/// DELETE /api/v1/books/:id
pub async fn delete(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let affected = state
        .books
        .delete(id)
        .await
        .map_err(AppError::store("could not delete book from db"))?;
    if affected == 0 {
        return Err(AppError::BadRequest("No such book with id".into()));
    }
    tracing::info!(id, "book deleted");
    Ok(success_empty(StatusCode::OK, "Book deleted successfully"))
}
