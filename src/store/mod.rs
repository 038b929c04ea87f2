//! Record snapshot sources for the listing pipeline

pub mod in_memory;

pub use in_memory::InMemoryGroupStore;

use crate::core::record::GroupRecord;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Source of customer-group record snapshots
///
/// The pipeline consumes whatever snapshot [`list`](GroupStore::list)
/// returns; coordination with in-flight fetches is the caller's job, and
/// callers are expected to re-run their query on every new snapshot.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Insert or replace a record
    async fn upsert(&self, record: GroupRecord) -> Result<GroupRecord>;

    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<GroupRecord>>;

    /// Snapshot of all records
    async fn list(&self) -> Result<Vec<GroupRecord>>;

    /// Delete a record
    async fn delete(&self, id: &Uuid) -> Result<()>;
}
