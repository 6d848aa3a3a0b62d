use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookFields};
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::model::{AddBookOutcome, LibraryStatistics};
use crate::core::domain::{Configuration, Counters};
use crate::core::library::{LibraryError, LibraryResult, SearchType};

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    catalog: SharedCatalog,
    counters: Arc<Counters>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: SharedCatalog, counters: Arc<Counters>) -> Self {
        Self {
            config: config.clone(),
            catalog,
            counters,
        }
    }

    async fn add(&self, book: BookEntity) -> LibraryResult<(BookDto, AddBookOutcome)> {
        let isbn = book.isbn.to_string();
        let mut catalog = self.catalog.lock().await;
        let outcome = catalog.add_existing_book(book).map_err(|err| {
            warn!(isbn = isbn.as_str(), "rejected book: {}", err);
            err
        })?;
        let added = catalog.find_book_by_isbn(isbn.as_str())
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::runtime(format!("book {} missing after add", isbn).as_str(), None))?;
        match outcome {
            AddBookOutcome::Inserted => info!(isbn = added.isbn.as_str(), title = added.title.as_str(), "added new book"),
            AddBookOutcome::Merged { added_copies } => info!(isbn = added.isbn.as_str(), added_copies, "merged copies into existing book"),
        }
        Ok((added, outcome))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn library_name(&self) -> String {
        self.catalog.lock().await.name().to_string()
    }

    async fn add_existing_book(&self, book: BookEntity) -> LibraryResult<(BookDto, AddBookOutcome)> {
        self.add(book).await
    }

    async fn create_and_add_book(&self, fields: &BookFields) -> LibraryResult<(BookDto, AddBookOutcome)> {
        let book = fields.build_book(&self.config).map_err(|err| {
            warn!(isbn = fields.isbn.as_str(), "rejected book: {}", err);
            err
        })?;
        self.counters.book_created();
        self.add(book).await
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.catalog.lock().await.find_book_by_isbn(isbn).map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))
    }

    async fn find_books_by_title(&self, keyword: &str) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.find_books_by_title(keyword).into_iter().map(BookDto::from).collect())
    }

    async fn find_books_by_author(&self, keyword: &str) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.find_books_by_author(keyword).into_iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, keyword: &str, search_type: SearchType) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.search_by_type(keyword, search_type).into_iter().map(BookDto::from).collect())
    }

    async fn search_all(&self, keyword: &str) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.search_all(keyword).into_iter().map(BookDto::from).collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.books().map(BookDto::from).collect())
    }

    async fn statistics(&self) -> LibraryResult<LibraryStatistics> {
        Ok(self.catalog.lock().await.statistics())
    }
}
