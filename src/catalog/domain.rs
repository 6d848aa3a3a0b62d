pub mod model;
pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookFields};
use crate::catalog::domain::model::{AddBookOutcome, LibraryCatalog, LibraryStatistics};
use crate::core::library::{LibraryResult, SearchType};

// SharedCatalog is the single owner of catalog state shared by the catalog, member and
// checkout services. Every service call locks it once.
pub(crate) type SharedCatalog = Arc<Mutex<LibraryCatalog>>;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn library_name(&self) -> String;
    async fn add_existing_book(&self, book: BookEntity) -> LibraryResult<(BookDto, AddBookOutcome)>;
    async fn create_and_add_book(&self, fields: &BookFields) -> LibraryResult<(BookDto, AddBookOutcome)>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_title(&self, keyword: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_author(&self, keyword: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, keyword: &str, search_type: SearchType) -> LibraryResult<Vec<BookDto>>;
    async fn search_all(&self, keyword: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn statistics(&self) -> LibraryResult<LibraryStatistics>;
}
