//! Record types for the fetched customer-group collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a customer belonging to a group
///
/// The pipeline only ever counts these; everything else about a customer
/// lives with the data-fetching collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: Uuid,
}

impl CustomerRef {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// The nested attribute bag carrying the display name and membership
/// used for filtering and sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Display name of the group
    pub name: String,

    /// Customers belonging to the group
    #[serde(default)]
    pub customers: Vec<CustomerRef>,
}

impl GroupInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customers: Vec::new(),
        }
    }

    pub fn with_customers(name: impl Into<String>, customers: Vec<CustomerRef>) -> Self {
        Self {
            name: name.into(),
            customers,
        }
    }

    /// Membership count used by the `customers` sort field
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

/// One item of the externally fetched collection being displayed
///
/// `group` is `None` while the nested attributes have not been materialized
/// by the fetch layer; such records are excluded from every filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Nested group attributes, absent during loading states
    pub group: Option<GroupInfo>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl GroupRecord {
    /// Create a new record with a fresh id and timestamps
    pub fn new(group: Option<GroupInfo>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            group,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the updated_at timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Display name of the group, empty while unmaterialized
    pub fn group_name(&self) -> &str {
        self.group.as_ref().map(|g| g.name.as_str()).unwrap_or("")
    }

    /// Membership count, zero while unmaterialized
    pub fn customer_count(&self) -> usize {
        self.group.as_ref().map(|g| g.customer_count()).unwrap_or(0)
    }
}
