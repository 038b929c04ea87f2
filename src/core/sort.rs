//! Sort directives
//!
//! The dashboard URL encodes ordering as a compact `[-]field` string. That
//! encoding is parsed once at the boundary into a tagged directive so
//! comparators never re-parse it.

use std::fmt;

/// Fields a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Case-folded group name (Unicode lowercase)
    Name,
    /// Membership count of the group
    Customers,
}

impl SortField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(SortField::Name),
            "customers" => Some(SortField::Customers),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Customers => "customers",
        }
    }
}

/// Direction applied to the field comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A parsed sort directive: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parse the `[-]field` encoding
    ///
    /// A leading `-` requests descending order. An unrecognized field name
    /// yields `None`, which callers treat as "leave the order unchanged" —
    /// the historical fallback of the dashboard, kept for compatibility.
    pub fn parse(order: &str) -> Option<Self> {
        let (direction, field) = match order.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, order),
        };

        SortField::parse(field).map(|field| Self { field, direction })
    }
}

impl fmt::Display for SortDirective {
    /// Re-encode in the `[-]field` form used for request building
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field.as_str()),
            SortDirection::Descending => write!(f, "-{}", self.field.as_str()),
        }
    }
}
