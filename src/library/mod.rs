//! # Library Records Module
//!
//! Author and book records with full create/read/update/delete support,
//! exposed through the admin HTTP surface. Referential integrity between
//! books and authors is enforced here rather than left to callers.

pub mod errors;
pub mod model;
pub mod seed;
pub mod service;

pub use errors::{LibraryError, LibraryResult};
pub use model::{Author, Book};
pub use service::{AuthorUpdate, AuthorView, BookUpdate, BookView, LibraryService};
