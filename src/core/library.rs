use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // No copy of the requested book is on the shelf right now. This is retry-able because
    // another borrower may return a copy later.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The borrower already holds a copy of the book, or returns a book without holding one.
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Validation { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Conflict { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Conflict { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Shelf state of a title derived from its copy counts.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    FullyAvailable,
    PartiallyBorrowed,
    FullyBorrowed,
}

impl BookStatus {
    // A title without any copy on the shelf counts as fully borrowed.
    pub fn from_copies(available: u32, total: u32) -> BookStatus {
        if available == 0 {
            BookStatus::FullyBorrowed
        } else if available >= total {
            BookStatus::FullyAvailable
        } else {
            BookStatus::PartiallyBorrowed
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::FullyAvailable => write!(f, "FullyAvailable"),
            BookStatus::PartiallyBorrowed => write!(f, "PartiallyBorrowed"),
            BookStatus::FullyBorrowed => write!(f, "FullyBorrowed"),
        }
    }
}

// Which book fields a keyword search looks at.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum SearchType {
    Title,
    Author,
    All,
    Unknown,
}

impl From<String> for SearchType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "title" => SearchType::Title,
            "author" => SearchType::Author,
            "all" => SearchType::All,
            _ => SearchType::Unknown,
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchType::Title => write!(f, "title"),
            SearchType::Author => write!(f, "author"),
            SearchType::All => write!(f, "all"),
            SearchType::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum HistoryAction {
    Borrow,
    Return,
}

impl Display for HistoryAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HistoryAction::Borrow => write!(f, "Borrow"),
            HistoryAction::Return => write!(f, "Return"),
        }
    }
}
