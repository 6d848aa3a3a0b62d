use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::HistoryAction;
use crate::utils::date::{serializer, today};

// HistoryRecord is one entry of the catalog's append-only borrow/return log
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct HistoryRecord {
    pub record_id: String,
    pub action: HistoryAction,
    pub isbn: String,
    pub book_title: String,
    pub borrower: String,
    #[serde(with = "serializer")]
    pub date: NaiveDate,
}

impl HistoryRecord {
    pub fn borrowed(isbn: &str, book_title: &str, borrower: &str) -> Self {
        Self::build(HistoryAction::Borrow, isbn, book_title, borrower, today())
    }

    pub fn returned(isbn: &str, book_title: &str, borrower: &str) -> Self {
        Self::build(HistoryAction::Return, isbn, book_title, borrower, today())
    }

    pub fn build(action: HistoryAction, isbn: &str, book_title: &str, borrower: &str, date: NaiveDate) -> Self {
        HistoryRecord {
            record_id: Uuid::new_v4().to_string(),
            action,
            isbn: isbn.to_string(),
            book_title: book_title.to_string(),
            borrower: borrower.to_string(),
            date,
        }
    }
}
