use crate::error::Result;
use crate::models::{BookId, RawVolume};
use async_trait::async_trait;

/// Transport seam between the aggregator and a book provider.
///
/// Every call maps to exactly one outbound request. Implementations must not
/// retry or cache.
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Ids of the volumes matching `query`, in provider order.
    async fn list_ids(&self, query: &str) -> Result<Vec<BookId>>;

    /// Metadata for a single volume previously returned by `list_ids`.
    async fn fetch_detail(&self, id: &BookId) -> Result<RawVolume>;
}
