use std::sync::atomic::{AtomicUsize, Ordering};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog entries
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub library_name: String,
    pub default_publisher: String,
    pub default_year: i32,
    pub default_copies: u32,
    pub history_limit: usize,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            default_publisher: "Unknown Publisher".to_string(),
            default_year: 2024,
            default_copies: 1,
            history_limit: 10,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("My Library")
    }
}

// Counters tracks how many books and libraries were created over the life of the process.
// It is owned by the application state and handed to whatever creates books or libraries.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    books_created: AtomicUsize,
    libraries_created: AtomicUsize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book_created(&self) -> usize {
        self.books_created.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn library_created(&self) -> usize {
        self.libraries_created.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn books_created(&self) -> usize {
        self.books_created.load(Ordering::Relaxed)
    }

    pub fn libraries_created(&self) -> usize {
        self.libraries_created.load(Ordering::Relaxed)
    }
}
