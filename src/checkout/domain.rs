use async_trait::async_trait;
use crate::core::events::HistoryRecord;
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub(crate) trait CheckoutService: Sync + Send {
    async fn borrow_book(&self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord>;
    async fn return_book(&self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord>;
    async fn recent_history(&self, limit: usize) -> LibraryResult<Vec<HistoryRecord>>;
}
