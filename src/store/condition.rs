//! # Filter Condition AST
//!
//! Represents filter operations for record queries. Conditions are
//! combined with AND logic and evaluated against the JSON form of a row.
//! No type coercion: a string never matches a number.

use std::cmp::Ordering;

use serde_json::Value;

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality
    Eq,

    /// Case-insensitive substring match (strings only)
    ILike,

    /// Greater than or equal (inclusive lower bound)
    Gte,

    /// Less than or equal (inclusive upper bound)
    Lte,

    /// Value in list
    In,
}

/// A single filter condition
#[derive(Debug, Clone)]
pub struct Condition {
    /// Field to filter on
    pub field: String,

    /// Comparison operator
    pub op: FilterOp,

    /// Value to compare against
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Create an equality condition
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Create a case-insensitive substring condition
    pub fn ilike(field: impl Into<String>, needle: &str) -> Self {
        Self::new(field, FilterOp::ILike, Value::String(needle.to_string()))
    }

    /// Create an inclusive lower-bound condition
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOp::Gte, value)
    }

    /// Create an inclusive upper-bound condition
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOp::Lte, value)
    }

    /// Create an "in list" condition
    pub fn in_list(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(field, FilterOp::In, Value::Array(values))
    }

    /// Check if a row (in JSON form) matches this condition
    ///
    /// Missing fields and null values never match.
    pub fn matches(&self, row: &Value) -> bool {
        let field_value = match row.get(&self.field) {
            Some(v) => v,
            None => return false,
        };

        if field_value.is_null() {
            return false;
        }

        match self.op {
            FilterOp::Eq => field_value == &self.value,
            FilterOp::ILike => {
                if let (Some(haystack), Some(needle)) =
                    (field_value.as_str(), self.value.as_str())
                {
                    haystack.to_lowercase().contains(&needle.to_lowercase())
                } else {
                    false
                }
            }
            FilterOp::Gte => {
                compare_ordered(field_value, &self.value).is_some_and(|o| o != Ordering::Less)
            }
            FilterOp::Lte => {
                compare_ordered(field_value, &self.value).is_some_and(|o| o != Ordering::Greater)
            }
            FilterOp::In => self
                .value
                .as_array()
                .is_some_and(|list| list.contains(field_value)),
        }
    }
}

/// Compare two JSON values where an ordering exists (numbers, strings)
fn compare_ordered(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let af = a.as_f64()?;
            let bf = b.as_f64()?;
            af.partial_cmp(&bf)
        }
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Compare optional JSON values for sorting
///
/// Present values sort before missing ones; incomparable values tie.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_ordered(a, b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
