use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookFields;
use crate::core::domain::Configuration;
use crate::core::events::HistoryRecord;
use crate::core::library::{LibraryError, LibraryResult, SearchType};

// AddBookOutcome tells whether an added book became a new entry or was merged into an
// existing entry with the same ISBN.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum AddBookOutcome {
    Inserted,
    Merged { added_copies: u32 },
}

// LibraryStatistics aggregates copy and member counts over the whole catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LibraryStatistics {
    pub book_titles: usize,
    pub total_copies: u64,
    pub available_copies: u64,
    pub borrowed_copies: u64,
    pub member_count: usize,
    pub utilization_rate: Option<f64>,
}

// LibraryCatalog owns every book, member and history record of a library. Books are keyed
// by ISBN and kept in insertion order, members are unique names and history only grows.
#[derive(Debug)]
pub(crate) struct LibraryCatalog {
    name: String,
    books: IndexMap<String, BookEntity>,
    members: BTreeSet<String>,
    history: Vec<HistoryRecord>,
}

impl LibraryCatalog {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            books: IndexMap::new(),
            members: BTreeSet::new(),
            history: vec![],
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add_existing_book(&mut self, book: BookEntity) -> LibraryResult<AddBookOutcome> {
        if let Some(existing) = self.books.get_mut(book.isbn.as_str()) {
            // Both counts grow by the incoming total even though none of the new copies
            // was ever lent out; the incoming borrow records are dropped.
            existing.add_copies(book.total_copies)?;
            Ok(AddBookOutcome::Merged { added_copies: book.total_copies })
        } else {
            self.books.insert(book.isbn.to_string(), book);
            Ok(AddBookOutcome::Inserted)
        }
    }

    pub fn create_and_add_book(&mut self, fields: &BookFields, config: &Configuration) -> LibraryResult<AddBookOutcome> {
        let book = fields.build_book(config)?;
        self.add_existing_book(book)
    }

    pub fn books(&self) -> impl Iterator<Item = &BookEntity> {
        self.books.values()
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.get(isbn)
    }

    pub fn find_book_by_title(&self, title: &str) -> Option<&BookEntity> {
        self.books.values().find(|b| b.title == title)
    }

    pub fn find_books_by_title(&self, keyword: &str) -> Vec<&BookEntity> {
        let keyword = keyword.to_lowercase();
        self.books.values().filter(|b| b.title.to_lowercase().contains(keyword.as_str())).collect()
    }

    pub fn find_books_by_author(&self, keyword: &str) -> Vec<&BookEntity> {
        let keyword = keyword.to_lowercase();
        self.books.values().filter(|b| b.author.to_lowercase().contains(keyword.as_str())).collect()
    }

    // search_all returns the union of title and author matches without duplicates. Callers
    // must not rely on the order of the result.
    pub fn search_all(&self, keyword: &str) -> Vec<&BookEntity> {
        let mut seen: HashSet<String> = HashSet::new();
        self.find_books_by_title(keyword).into_iter()
            .chain(self.find_books_by_author(keyword))
            .filter(|b| seen.insert(b.isbn.to_string()))
            .collect()
    }

    pub fn search_by_type(&self, keyword: &str, search_type: SearchType) -> Vec<&BookEntity> {
        if keyword.is_empty() {
            return vec![];
        }
        match search_type {
            SearchType::Title => self.find_books_by_title(keyword),
            SearchType::Author => self.find_books_by_author(keyword),
            SearchType::All => self.search_all(keyword),
            SearchType::Unknown => {
                warn!(keyword, "search with unknown search type");
                vec![]
            }
        }
    }

    pub fn register_member(&mut self, name: &str) -> LibraryResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::validation("member name must not be empty", Some("400".to_string())));
        }
        if self.members.contains(name) {
            return Err(LibraryError::duplicate_key(
                format!("member {} is already registered", name).as_str()));
        }
        self.members.insert(name.to_string());
        Ok(name.to_string())
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn members(&self) -> impl Iterator<Item = &String> {
        self.members.iter()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn borrowed_count(&self, member: &str) -> usize {
        self.books.values().filter(|b| b.has_borrower(member)).count()
    }

    pub fn books_borrowed_by(&self, member: &str) -> LibraryResult<Vec<&BookEntity>> {
        if !self.is_member(member) {
            return Err(LibraryError::not_found(format!("member {} is not registered", member).as_str()));
        }
        Ok(self.books.values().filter(|b| b.has_borrower(member)).collect())
    }

    pub fn borrow_book(&mut self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord> {
        if !self.is_member(borrower) {
            return Err(LibraryError::not_found(format!("member {} is not registered", borrower).as_str()));
        }
        let book = self.books.get_mut(isbn)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))?;
        let _ = book.borrow(borrower)?;
        let record = HistoryRecord::borrowed(isbn, book.title.as_str(), borrower);
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn return_book(&mut self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord> {
        let book = self.books.get_mut(isbn)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))?;
        let _ = book.return_book(borrower)?;
        let record = HistoryRecord::returned(isbn, book.title.as_str(), borrower);
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.as_slice()
    }

    // recent_history returns up to limit records, newest first
    pub fn recent_history(&self, limit: usize) -> Vec<&HistoryRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn statistics(&self) -> LibraryStatistics {
        let total_copies: u64 = self.books.values().map(|b| b.total_copies as u64).sum();
        let available_copies: u64 = self.books.values().map(|b| b.available_copies as u64).sum();
        let borrowed_copies = total_copies.saturating_sub(available_copies);
        let utilization_rate = if total_copies > 0 {
            Some(borrowed_copies as f64 / total_copies as f64 * 100.0)
        } else {
            None
        };
        LibraryStatistics {
            book_titles: self.books.len(),
            total_copies,
            available_copies,
            borrowed_copies,
            member_count: self.members.len(),
            utilization_rate,
        }
    }
}

impl Display for LibraryCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Library({}) - {} titles, {} members", self.name, self.books.len(), self.members.len())
    }
}
