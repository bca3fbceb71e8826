use crate::domain::CompanyRecord;
use anyhow::Result;

/// Trait defining the read interface the ranking pipeline needs.
/// The production implementation is Postgres-backed; tests substitute a
/// mock so handler behavior can be asserted without a database.
#[async_trait::async_trait]
pub trait CompanyRepositoryTrait: Send + Sync {
    /// Fetch every company in one unbounded scan, projecting only the
    /// id, name and boycott counter columns. There is no store-side
    /// top-K here: ranking is computed by the caller from the complete
    /// set, so a partial read would be a correctness bug, not an
    /// optimization.
    async fn scan_companies(&self) -> Result<Vec<CompanyRecord>>;
}
