use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{serializer, today};

// BorrowRecord is an open loan of one copy to one borrower.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowRecord {
    pub borrower: String,
    #[serde(with = "serializer")]
    pub borrow_date: NaiveDate,
}

// BookEntity abstracts a catalog title and its copies. All copies share the ISBN, which is
// also the identity of the entry: two entities with the same ISBN are the same title.
//
// available_copies + borrow_records.len() == total_copies holds after every operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub year: i32,
    pub total_copies: u32,
    pub available_copies: u32,
    pub borrow_records: Vec<BorrowRecord>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, publisher: &str, year: i32, copies: u32) -> LibraryResult<Self> {
        let title = title.trim();
        let author = author.trim();
        let isbn = isbn.trim();
        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return Err(LibraryError::validation(
                format!("title, author and isbn are required but got title={:?} author={:?} isbn={:?}",
                        title, author, isbn).as_str(), Some("400".to_string())));
        }
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publisher: publisher.trim().to_string(),
            year,
            total_copies: copies,
            available_copies: copies,
            borrow_records: vec![],
        })
    }

    pub fn borrow(&mut self, borrower: &str) -> LibraryResult<BorrowRecord> {
        self.borrow_on(borrower, today())
    }

    pub fn borrow_on(&mut self, borrower: &str, date: NaiveDate) -> LibraryResult<BorrowRecord> {
        if !self.is_available() {
            return Err(LibraryError::unavailable(
                format!("no copy of {} is available", self.isbn).as_str(), Some("409".to_string()), true));
        }
        if self.has_borrower(borrower) {
            return Err(LibraryError::conflict(
                format!("{} already borrowed {}", borrower, self.isbn).as_str(), Some("409".to_string())));
        }
        let record = BorrowRecord {
            borrower: borrower.to_string(),
            borrow_date: date,
        };
        self.available_copies -= 1;
        self.borrow_records.push(record.clone());
        Ok(record)
    }

    pub fn return_book(&mut self, borrower: &str) -> LibraryResult<BorrowRecord> {
        match self.borrow_records.iter().position(|r| r.borrower == borrower) {
            Some(ndx) => {
                let record = self.borrow_records.remove(ndx);
                self.available_copies += 1;
                Ok(record)
            }
            None => {
                Err(LibraryError::conflict(
                    format!("{} has not borrowed {}", borrower, self.isbn).as_str(), Some("409".to_string())))
            }
        }
    }

    pub fn has_borrower(&self, borrower: &str) -> bool {
        self.borrow_records.iter().any(|r| r.borrower == borrower)
    }

    pub fn borrower_list(&self) -> Vec<String> {
        self.borrow_records.iter().map(|r| r.borrower.to_string()).collect()
    }

    // add_copies grows both counts, which is how a repeated ISBN is merged into the catalog.
    // Both counts stay unchanged when either would overflow.
    pub fn add_copies(&mut self, copies: u32) -> LibraryResult<()> {
        match (self.total_copies.checked_add(copies), self.available_copies.checked_add(copies)) {
            (Some(total), Some(available)) => {
                self.total_copies = total;
                self.available_copies = available;
                Ok(())
            }
            _ => Err(LibraryError::validation(
                format!("adding {} copies to book {} exceeds the copy limit", copies, self.isbn).as_str(),
                Some("400".to_string()))),
        }
    }

    pub fn is_valid_isbn(isbn: &str) -> bool {
        let cleaned: String = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();
        !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) &&
            (cleaned.len() == 10 || cleaned.len() == 13)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_copies(self.available_copies, self.total_copies)
    }
}

impl PartialEq for BookEntity {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for BookEntity {}

impl Hash for BookEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "《{}》 - {} (available: {}/{})", self.title, self.author, self.available_copies, self.total_copies)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use chrono::NaiveDate;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, LibraryError};

    fn build_book(copies: u32) -> BookEntity {
        BookEntity::new("Python编程:从入门到实践", "埃里克·马瑟斯", "978-7-115-42802-8",
                        "人民邮电出版社", 2016, copies).expect("should build book")
    }

    fn assert_copies_balanced(book: &BookEntity) {
        assert_eq!(book.total_copies, book.available_copies + book.borrow_records.len() as u32);
        assert!(book.available_copies <= book.total_copies);
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("  title ", " author", "isbn  ", " publisher ", 2013, 2).expect("should build book");
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("publisher", book.publisher.as_str());
        assert_eq!(2, book.total_copies);
        assert_eq!(2, book.available_copies);
        assert!(book.borrow_records.is_empty());
        assert_eq!(BookStatus::FullyAvailable, book.status());
    }

    #[tokio::test]
    async fn test_should_reject_missing_fields() {
        assert!(matches!(BookEntity::new("", "author", "isbn", "", 2024, 1), Err(LibraryError::Validation { .. })));
        assert!(matches!(BookEntity::new("title", "   ", "isbn", "", 2024, 1), Err(LibraryError::Validation { .. })));
        assert!(matches!(BookEntity::new("title", "author", "\t", "", 2024, 1), Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_borrow_and_return() {
        let mut book = build_book(3);
        let record = book.borrow("张三").expect("should borrow");
        assert_eq!("张三", record.borrower.as_str());
        assert_eq!(2, book.available_copies);
        assert_eq!(BookStatus::PartiallyBorrowed, book.status());
        assert_copies_balanced(&book);

        let returned = book.return_book("张三").expect("should return");
        assert_eq!(record, returned);
        assert_eq!(3, book.available_copies);
        assert!(book.borrower_list().is_empty());
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_not_borrow_twice() {
        let mut book = build_book(3);
        let _ = book.borrow("张三").expect("should borrow");
        let res = book.borrow("张三");
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(2, book.available_copies);
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_not_borrow_when_fully_borrowed() {
        let mut book = build_book(1);
        let _ = book.borrow("李四").expect("should borrow");
        assert!(!book.is_available());
        assert_eq!(BookStatus::FullyBorrowed, book.status());
        let res = book.borrow("王五");
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { retryable: true, .. })));
        assert_eq!(vec!["李四".to_string()], book.borrower_list());
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_not_return_without_record() {
        let mut book = build_book(2);
        let res = book.return_book("赵六");
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(2, book.available_copies);
    }

    #[tokio::test]
    async fn test_should_keep_borrow_order() {
        let mut book = build_book(3);
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");
        let _ = book.borrow_on("a", date).expect("should borrow");
        let _ = book.borrow_on("b", date).expect("should borrow");
        let _ = book.borrow_on("c", date).expect("should borrow");
        let _ = book.return_book("b").expect("should return");
        assert_eq!(vec!["a".to_string(), "c".to_string()], book.borrower_list());
        assert_eq!(date, book.borrow_records[0].borrow_date);
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_add_copies() {
        let mut book = build_book(1);
        let _ = book.borrow("a").expect("should borrow");
        book.add_copies(2).expect("should add copies");
        assert_eq!(3, book.total_copies);
        assert_eq!(2, book.available_copies);
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_not_overflow_copies() {
        let mut book = build_book(2);
        let _ = book.borrow("a").expect("should borrow");
        let res = book.add_copies(u32::MAX);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(2, book.total_copies);
        assert_eq!(1, book.available_copies);
        assert_copies_balanced(&book);
    }

    #[tokio::test]
    async fn test_should_validate_isbn() {
        assert!(BookEntity::is_valid_isbn("978-7-115-42802-8"));
        assert!(BookEntity::is_valid_isbn("0 306 40615 2"));
        assert!(BookEntity::is_valid_isbn("0306406152"));
        assert!(!BookEntity::is_valid_isbn("030640615"));
        assert!(!BookEntity::is_valid_isbn("978-7-115-4280X-8"));
        assert!(!BookEntity::is_valid_isbn(""));
        assert!(!BookEntity::is_valid_isbn("--"));
    }

    #[tokio::test]
    async fn test_should_compare_by_isbn() {
        let first = build_book(1);
        let mut second = build_book(5);
        second.title = "other".to_string();
        assert_eq!(first, second);
        let set: HashSet<BookEntity> = vec![first, second].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[tokio::test]
    async fn test_should_display_book() {
        let book = build_book(3);
        assert_eq!("《Python编程:从入门到实践》 - 埃里克·马瑟斯 (available: 3/3)", book.to_string());
    }

    #[tokio::test]
    async fn test_should_derive_status_without_copies() {
        let book = BookEntity::new("title", "author", "isbn", "", 2024, 0).expect("should build book");
        assert!(!book.is_available());
        assert_eq!(BookStatus::FullyBorrowed, book.status());
    }
}
