//! # Library Record Service
//!
//! CRUD over author and book tables. Invariants enforced here:
//! a book's `author_id`, if set, must reference an existing author, and
//! an author cannot be deleted while books still reference it.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::Serialize;

use crate::store::{StoreError, Table};

use super::errors::{LibraryError, LibraryResult};
use super::model::{Author, Book};

/// Author read projection with the computed book back-reference
#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub book_ids: Vec<i64>,
}

/// Book read projection
#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub id: i64,
    pub title: String,
    pub published_date: Option<NaiveDate>,
    pub author_id: Option<i64>,
}

impl BookView {
    fn of(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            published_date: book.published_date,
            author_id: book.author_id,
        }
    }
}

/// Partial author update; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Partial book update; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub author_id: Option<i64>,
}

struct LibraryTables {
    authors: Table<Author>,
    books: Table<Book>,
}

/// Author and book record management
pub struct LibraryService {
    inner: RwLock<LibraryTables>,
}

impl LibraryService {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LibraryTables {
                authors: Table::new(),
                books: Table::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, LibraryTables>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LibraryTables>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    // ==================
    // Authors
    // ==================

    pub fn create_author(&self, name: &str, age: Option<i64>) -> LibraryResult<AuthorView> {
        if name.trim().is_empty() {
            return Err(LibraryError::MissingAuthorName);
        }

        let mut tables = self.write()?;
        let author = Author {
            id: 0,
            name: name.to_string(),
            age,
        };
        let id = tables.authors.insert(author.clone());

        Ok(author_view(&tables, &Author { id, ..author }))
    }

    pub fn get_author(&self, id: i64) -> LibraryResult<AuthorView> {
        let tables = self.read()?;
        let author = tables
            .authors
            .get(id)
            .ok_or(LibraryError::AuthorNotFound(id))?;
        Ok(author_view(&tables, author))
    }

    /// All authors ordered by name
    pub fn list_authors(&self) -> LibraryResult<Vec<AuthorView>> {
        let tables = self.read()?;
        let authors = tables.authors.search(&[], "name", None, 0)?;
        Ok(authors.iter().map(|a| author_view(&tables, a)).collect())
    }

    pub fn update_author(&self, id: i64, update: AuthorUpdate) -> LibraryResult<AuthorView> {
        let mut tables = self.write()?;

        let mut author = tables
            .authors
            .get(id)
            .cloned()
            .ok_or(LibraryError::AuthorNotFound(id))?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(LibraryError::MissingAuthorName);
            }
            author.name = name;
        }
        if let Some(age) = update.age {
            author.age = Some(age);
        }

        tables.authors.update(id, author.clone());
        Ok(author_view(&tables, &author))
    }

    /// Delete an author; rejected while books still reference it
    pub fn delete_author(&self, id: i64) -> LibraryResult<()> {
        let mut tables = self.write()?;

        if tables.authors.get(id).is_none() {
            return Err(LibraryError::AuthorNotFound(id));
        }

        let count = tables
            .books
            .iter()
            .filter(|b| b.author_id == Some(id))
            .count();
        if count > 0 {
            return Err(LibraryError::AuthorInUse { id, count });
        }

        tables.authors.remove(id);
        Ok(())
    }

    // ==================
    // Books
    // ==================

    pub fn create_book(
        &self,
        title: &str,
        published_date: Option<NaiveDate>,
        author_id: Option<i64>,
    ) -> LibraryResult<BookView> {
        if title.trim().is_empty() {
            return Err(LibraryError::MissingBookTitle);
        }

        let mut tables = self.write()?;

        if let Some(author_id) = author_id {
            if tables.authors.get(author_id).is_none() {
                return Err(LibraryError::UnknownAuthor(author_id));
            }
        }

        let book = Book {
            id: 0,
            title: title.to_string(),
            published_date,
            author_id,
        };
        let id = tables.books.insert(book.clone());

        Ok(BookView::of(&Book { id, ..book }))
    }

    pub fn get_book(&self, id: i64) -> LibraryResult<BookView> {
        let tables = self.read()?;
        let book = tables.books.get(id).ok_or(LibraryError::BookNotFound(id))?;
        Ok(BookView::of(book))
    }

    /// All books ordered by title
    pub fn list_books(&self) -> LibraryResult<Vec<BookView>> {
        let tables = self.read()?;
        let books = tables.books.search(&[], "title", None, 0)?;
        Ok(books.iter().map(BookView::of).collect())
    }

    pub fn update_book(&self, id: i64, update: BookUpdate) -> LibraryResult<BookView> {
        let mut tables = self.write()?;

        let mut book = tables
            .books
            .get(id)
            .cloned()
            .ok_or(LibraryError::BookNotFound(id))?;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(LibraryError::MissingBookTitle);
            }
            book.title = title;
        }
        if let Some(date) = update.published_date {
            book.published_date = Some(date);
        }
        if let Some(author_id) = update.author_id {
            if tables.authors.get(author_id).is_none() {
                return Err(LibraryError::UnknownAuthor(author_id));
            }
            book.author_id = Some(author_id);
        }

        tables.books.update(id, book.clone());
        Ok(BookView::of(&book))
    }

    pub fn delete_book(&self, id: i64) -> LibraryResult<()> {
        let mut tables = self.write()?;
        tables
            .books
            .remove(id)
            .map(|_| ())
            .ok_or(LibraryError::BookNotFound(id))
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}

fn author_view(tables: &LibraryTables, author: &Author) -> AuthorView {
    let book_ids = tables
        .books
        .iter()
        .filter(|b| b.author_id == Some(author.id))
        .map(|b| b.id)
        .collect();

    AuthorView {
        id: author.id,
        name: author.name.clone(),
        age: author.age,
        book_ids,
    }
}
