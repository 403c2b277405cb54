//! Library Record Tests
//!
//! Referential behavior of the author/book records:
//! - A book's author_id must resolve to an existing author
//! - Authors cannot be deleted while books reference them
//! - The author projection carries the book back-reference

use axum::http::StatusCode;
use catalogd::http_server::ApiError;
use catalogd::library::{AuthorUpdate, BookUpdate, LibraryError, LibraryService};
use chrono::NaiveDate;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_library() -> LibraryService {
    let library = LibraryService::new();

    let le_guin = library.create_author("Ursula K. Le Guin", Some(88)).unwrap();
    library
        .create_book(
            "A Wizard of Earthsea",
            NaiveDate::from_ymd_opt(1968, 11, 1),
            Some(le_guin.id),
        )
        .unwrap();
    library
        .create_book("The Dispossessed", None, Some(le_guin.id))
        .unwrap();

    library
}

// =============================================================================
// Referential Integrity
// =============================================================================

/// Creating a book against a missing author is rejected.
#[test]
fn test_book_creation_requires_resolvable_author() {
    let library = setup_library();

    let err = library.create_book("Ghost Book", None, Some(42)).unwrap_err();
    assert!(matches!(err, LibraryError::UnknownAuthor(42)));

    // The invariant maps to a conflict on the admin surface
    assert_eq!(ApiError::from(err).status_code(), StatusCode::CONFLICT);
}

/// Reassigning a book to a missing author is rejected too.
#[test]
fn test_book_update_requires_resolvable_author() {
    let library = setup_library();

    let err = library
        .update_book(
            1,
            BookUpdate {
                author_id: Some(42),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, LibraryError::UnknownAuthor(42)));
}

/// Authors with books cannot be deleted; once the books are gone they can.
#[test]
fn test_author_delete_restricted_then_allowed() {
    let library = setup_library();

    let err = library.delete_author(1).unwrap_err();
    assert!(matches!(err, LibraryError::AuthorInUse { id: 1, count: 2 }));

    library.delete_book(1).unwrap();
    library.delete_book(2).unwrap();
    library.delete_author(1).unwrap();

    assert!(library.list_authors().unwrap().is_empty());
}

// =============================================================================
// Projections
// =============================================================================

/// The author view lists owned book ids in insertion order.
#[test]
fn test_author_view_back_reference() {
    let library = setup_library();

    let view = library.get_author(1).unwrap();
    assert_eq!(view.book_ids, vec![1, 2]);
}

/// Books without an author are valid and independent of any author's life.
#[test]
fn test_anonymous_books_are_unaffected_by_author_deletion() {
    let library = LibraryService::new();
    let author = library.create_author("Solo", None).unwrap();
    library.create_book("Unattributed", None, None).unwrap();

    library.delete_author(author.id).unwrap();
    assert_eq!(library.list_books().unwrap().len(), 1);
}

// =============================================================================
// Update Semantics
// =============================================================================

/// Partial updates leave absent fields untouched.
#[test]
fn test_partial_update_preserves_other_fields() {
    let library = setup_library();

    let updated = library
        .update_author(
            1,
            AuthorUpdate {
                age: Some(89),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Ursula K. Le Guin");
    assert_eq!(updated.age, Some(89));

    let updated = library
        .update_book(
            2,
            BookUpdate {
                published_date: NaiveDate::from_ymd_opt(1974, 5, 1),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, "The Dispossessed");
    assert_eq!(updated.author_id, Some(1));
}

/// Updates against missing records are not-found errors.
#[test]
fn test_update_missing_records() {
    let library = setup_library();

    assert!(matches!(
        library.update_author(99, AuthorUpdate::default()),
        Err(LibraryError::AuthorNotFound(99))
    ));
    assert!(matches!(
        library.update_book(99, BookUpdate::default()),
        Err(LibraryError::BookNotFound(99))
    ));
}
