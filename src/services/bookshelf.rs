use crate::error::Result;
use crate::models::{BookDetail, BookId, SearchResult};
use crate::services::BooksApi;
use futures::future::join_all;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves a search query into book details.
///
/// The listing call is the only one whose failure is reported. Every listed id
/// is then fetched concurrently, and a failed fetch only removes that volume
/// from the result.
#[derive(Clone)]
pub struct BookshelfService {
    api: Arc<dyn BooksApi>,
}

impl BookshelfService {
    pub fn new(api: Arc<dyn BooksApi>) -> Self {
        Self { api }
    }

    /// Search for `query` and resolve every matching volume.
    ///
    /// Results keep the listing order. Dropping the returned future cancels
    /// all in-flight detail fetches.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let ids = self.api.list_ids(query).await?;
        debug!(query, count = ids.len(), "Listed volume ids");

        let books: SearchResult = join_all(ids.iter().map(|id| self.resolve(id)))
            .await
            .into_iter()
            .flatten()
            .collect();

        info!(
            query,
            listed = ids.len(),
            resolved = books.len(),
            "Search complete"
        );
        Ok(books)
    }

    async fn resolve(&self, id: &BookId) -> Option<BookDetail> {
        let fetch = AssertUnwindSafe(self.api.fetch_detail(id)).catch_unwind();

        match fetch.await {
            Ok(Ok(raw)) => Some(BookDetail::from(raw)),
            Ok(Err(e)) => {
                warn!(book_id = %id, error = %e, "Dropping volume, detail fetch failed");
                None
            }
            Err(_) => {
                warn!(book_id = %id, "Dropping volume, detail fetch panicked");
                None
            }
        }
    }
}
