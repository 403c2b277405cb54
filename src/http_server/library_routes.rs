//! Library Record HTTP Routes
//!
//! Admin surface for author and book records: plain JSON CRUD in place
//! of the host platform's generic record forms.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::library::{AuthorUpdate, AuthorView, BookUpdate, BookView, LibraryService};

use super::errors::ApiResult;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AuthorsListResponse {
    pub authors: Vec<AuthorView>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct BooksListResponse {
    pub books: Vec<BookView>,
    pub total: usize,
}

// ==================
// Routes
// ==================

/// Create the admin record routes
pub fn library_routes(library: Arc<LibraryService>) -> Router {
    Router::new()
        .route("/authors", get(list_authors_handler))
        .route("/authors", post(create_author_handler))
        .route("/authors/{id}", get(get_author_handler))
        .route("/authors/{id}", patch(update_author_handler))
        .route("/authors/{id}", delete(delete_author_handler))
        .route("/books", get(list_books_handler))
        .route("/books", post(create_book_handler))
        .route("/books/{id}", get(get_book_handler))
        .route("/books/{id}", patch(update_book_handler))
        .route("/books/{id}", delete(delete_book_handler))
        .with_state(library)
}

// ==================
// Author Handlers
// ==================

async fn list_authors_handler(
    State(library): State<Arc<LibraryService>>,
) -> ApiResult<Json<AuthorsListResponse>> {
    let authors = library.list_authors()?;
    let total = authors.len();
    Ok(Json(AuthorsListResponse { authors, total }))
}

async fn create_author_handler(
    State(library): State<Arc<LibraryService>>,
    Json(request): Json<CreateAuthorRequest>,
) -> ApiResult<(StatusCode, Json<AuthorView>)> {
    let author = library.create_author(&request.name, request.age)?;
    Ok((StatusCode::CREATED, Json(author)))
}

async fn get_author_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<AuthorView>> {
    Ok(Json(library.get_author(id)?))
}

async fn update_author_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAuthorRequest>,
) -> ApiResult<Json<AuthorView>> {
    let update = AuthorUpdate {
        name: request.name,
        age: request.age,
    };
    Ok(Json(library.update_author(id, update)?))
}

async fn delete_author_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    library.delete_author(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================
// Book Handlers
// ==================

async fn list_books_handler(
    State(library): State<Arc<LibraryService>>,
) -> ApiResult<Json<BooksListResponse>> {
    let books = library.list_books()?;
    let total = books.len();
    Ok(Json(BooksListResponse { books, total }))
}

async fn create_book_handler(
    State(library): State<Arc<LibraryService>>,
    Json(request): Json<CreateBookRequest>,
) -> ApiResult<(StatusCode, Json<BookView>)> {
    let book = library.create_book(&request.title, request.published_date, request.author_id)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BookView>> {
    Ok(Json(library.get_book(id)?))
}

async fn update_book_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> ApiResult<Json<BookView>> {
    let update = BookUpdate {
        title: request.title,
        published_date: request.published_date,
        author_id: request.author_id,
    };
    Ok(Json(library.update_book(id, update)?))
}

async fn delete_book_handler(
    State(library): State<Arc<LibraryService>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    library.delete_book(id)?;
    Ok(StatusCode::NO_CONTENT)
}
