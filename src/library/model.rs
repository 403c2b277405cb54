//! Library record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// An author record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
}

impl Record for Author {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A book record, owned by at most one author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub published_date: Option<NaiveDate>,
    pub author_id: Option<i64>,
}

impl Record for Book {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}
