use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BorrowRecord};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{BookStatus, LibraryResult};

// BookDto is a read-only snapshot of a catalog entry handed out by the services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i32,
    pub total_copies: u32,
    pub available_copies: u32,
    pub book_status: BookStatus,
    pub borrow_records: Vec<BorrowRecord>,
}

impl BookDto {
    pub fn borrowers(&self) -> Vec<String> {
        self.borrow_records.iter().map(|r| r.borrower.to_string()).collect()
    }

    pub fn borrowed_copies(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            year: other.year,
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            book_status: other.status(),
            borrow_records: other.borrow_records.clone(),
        }
    }
}

// BookFields carries the raw fields of a title that is not constructed yet. Optional
// fields fall back to the configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: Option<String>,
    pub year: Option<i32>,
    pub copies: Option<u32>,
}

impl BookFields {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publisher: None,
            year: None,
            copies: None,
        }
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.publisher = Some(publisher.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = Some(copies);
        self
    }

    pub fn build_book(&self, config: &Configuration) -> LibraryResult<BookEntity> {
        let publisher = match &self.publisher {
            Some(publisher) if !publisher.trim().is_empty() => publisher.as_str(),
            _ => config.default_publisher.as_str(),
        };
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), publisher,
                        self.year.unwrap_or(config.default_year),
                        self.copies.unwrap_or(config.default_copies))
    }
}
