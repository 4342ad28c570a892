use super::models::Record;
use crate::error::Result;
use async_trait::async_trait;

/// Record management operations every DNS provider exposes.
///
/// `authenticate` must succeed before any record operation.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Obtains a token and resolves the managed domain's id.
    async fn authenticate(&mut self) -> Result<()>;

    /// Creates a record. Creating an identical existing record is a no-op.
    async fn create_record(&self, record_type: &str, name: &str, content: &str) -> Result<bool>;

    /// Lists records of the domain, keeping those matching every given filter.
    async fn list_records(
        &self,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<Vec<Record>>;

    /// Replaces a record. Without `identifier`, the record is looked up by
    /// type and name and must be unique.
    async fn update_record(
        &self,
        identifier: Option<&str>,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<bool>;

    /// Deletes every record matching the filters. No match is not an error.
    async fn delete_record(
        &self,
        identifier: Option<&str>,
        record_type: Option<&str>,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<bool>;
}
