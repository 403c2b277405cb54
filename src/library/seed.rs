//! Demo fixtures for the library records.

use chrono::NaiveDate;

use super::errors::LibraryResult;
use super::service::LibraryService;

/// Populate the library with a couple of authors and their books
pub fn seed_demo(library: &LibraryService) -> LibraryResult<()> {
    let le_guin = library.create_author("Ursula K. Le Guin", Some(88))?;
    let eco = library.create_author("Umberto Eco", Some(84))?;

    library.create_book(
        "A Wizard of Earthsea",
        NaiveDate::from_ymd_opt(1968, 11, 1),
        Some(le_guin.id),
    )?;
    library.create_book(
        "The Dispossessed",
        NaiveDate::from_ymd_opt(1974, 5, 1),
        Some(le_guin.id),
    )?;
    library.create_book(
        "The Name of the Rose",
        NaiveDate::from_ymd_opt(1980, 9, 1),
        Some(eco.id),
    )?;

    Ok(())
}
