use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use crate::books::factory::create_sample_books;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::model::LibraryCatalog;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::{Configuration, Counters};
use crate::core::library::LibraryResult;

const SAMPLE_MEMBERS: [&str; 5] = ["张三", "李四", "王五", "赵六", "钱七"];

// isbn, borrower
const SAMPLE_LOANS: [(&str, &str); 3] = [
    ("978-7-115-42802-8", "张三"),
    ("978-7-111-40701-0", "李四"),
    ("978-7-111-55719-2", "王五"),
];

pub(crate) fn create_library(config: &Configuration, counters: &Counters) -> SharedCatalog {
    let total = counters.library_created();
    info!(name = config.library_name.as_str(), total, "created library");
    Arc::new(Mutex::new(LibraryCatalog::new(config.library_name.as_str())))
}

// create_sample_library builds a library with five books, five members and three loans
pub(crate) fn create_sample_library(config: &Configuration, counters: &Counters) -> LibraryResult<SharedCatalog> {
    let mut catalog = LibraryCatalog::new(config.library_name.as_str());
    counters.library_created();
    for book in create_sample_books(counters)? {
        let _ = catalog.add_existing_book(book)?;
    }
    for member in SAMPLE_MEMBERS {
        let _ = catalog.register_member(member)?;
    }
    for (isbn, borrower) in SAMPLE_LOANS {
        let _ = catalog.borrow_book(isbn, borrower)?;
    }
    info!(name = config.library_name.as_str(), books = catalog.len(), members = catalog.member_count(),
        "created sample library");
    Ok(Arc::new(Mutex::new(catalog)))
}

pub(crate) fn create_catalog_service(config: &Configuration, catalog: SharedCatalog, counters: Arc<Counters>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, catalog, counters))
}
