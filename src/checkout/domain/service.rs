use async_trait::async_trait;
use tracing::{info, warn};
use crate::catalog::domain::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::events::HistoryRecord;
use crate::core::library::LibraryResult;

pub(crate) struct CheckoutServiceImpl {
    catalog: SharedCatalog,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow_book(&self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord> {
        let mut catalog = self.catalog.lock().await;
        catalog.borrow_book(isbn, borrower).map(|record| {
            info!(isbn, borrower, title = record.book_title.as_str(), "borrowed book");
            record
        }).map_err(|err| {
            warn!(isbn, borrower, "borrow refused: {}", err);
            err
        })
    }

    async fn return_book(&self, isbn: &str, borrower: &str) -> LibraryResult<HistoryRecord> {
        let mut catalog = self.catalog.lock().await;
        catalog.return_book(isbn, borrower).map(|record| {
            info!(isbn, borrower, title = record.book_title.as_str(), "returned book");
            record
        }).map_err(|err| {
            warn!(isbn, borrower, "return refused: {}", err);
            err
        })
    }

    async fn recent_history(&self, limit: usize) -> LibraryResult<Vec<HistoryRecord>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.recent_history(limit).into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::SharedCatalog;
    use crate::catalog::factory::{create_catalog_service, create_library};
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::factory;
    use crate::books::dto::BookFields;
    use crate::core::domain::{Configuration, Counters};
    use crate::core::library::{HistoryAction, LibraryError};
    use crate::members::factory::create_member_service;
    use std::sync::Arc;

    const ISBN: &str = "978-7-115-42802-8";

    async fn build_catalog() -> SharedCatalog {
        let config = Configuration::new("test");
        let counters = Arc::new(Counters::new());
        let catalog = create_library(&config, &counters);
        let catalog_svc = create_catalog_service(&config, catalog.clone(), counters);
        let _ = catalog_svc.create_and_add_book(
            &BookFields::new("Python编程:从入门到实践", "埃里克·马瑟斯", ISBN).with_copies(3))
            .await.expect("should add book");
        let _ = create_member_service(&config, catalog.clone())
            .register_member("张三").await.expect("should register member");
        catalog
    }

    fn build_service(catalog: SharedCatalog) -> Box<dyn CheckoutService> {
        factory::create_checkout_service(&Configuration::new("test"), catalog)
    }

    async fn available(catalog: &SharedCatalog) -> u32 {
        catalog.lock().await.find_book_by_isbn(ISBN).map(|b| b.available_copies).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_should_borrow_and_return() {
        let catalog = build_catalog().await;
        let checkout_svc = build_service(catalog.clone());

        let borrowed = checkout_svc.borrow_book(ISBN, "张三").await.expect("should borrow");
        assert_eq!(HistoryAction::Borrow, borrowed.action);
        assert_eq!(2, available(&catalog).await);

        let res = checkout_svc.borrow_book(ISBN, "张三").await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(2, available(&catalog).await);

        let returned = checkout_svc.return_book(ISBN, "张三").await.expect("should return");
        assert_eq!(HistoryAction::Return, returned.action);
        assert_eq!(3, available(&catalog).await);

        let res = checkout_svc.return_book(ISBN, "张三").await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(Some(0.0), catalog.lock().await.statistics().utilization_rate);
    }

    #[tokio::test]
    async fn test_should_not_borrow_for_unregistered_member() {
        let catalog = build_catalog().await;
        let checkout_svc = build_service(catalog.clone());

        let res = checkout_svc.borrow_book(ISBN, "未注册用户").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(3, available(&catalog).await);
        assert!(checkout_svc.recent_history(10).await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_list_recent_history() {
        let catalog = build_catalog().await;
        let checkout_svc = build_service(catalog);

        let _ = checkout_svc.borrow_book(ISBN, "张三").await.expect("should borrow");
        let _ = checkout_svc.return_book(ISBN, "张三").await.expect("should return");
        let _ = checkout_svc.borrow_book(ISBN, "张三").await.expect("should borrow");

        let history = checkout_svc.recent_history(2).await.expect("should list");
        assert_eq!(2, history.len());
        assert_eq!(HistoryAction::Borrow, history[0].action);
        assert_eq!(HistoryAction::Return, history[1].action);
        assert_eq!(3, checkout_svc.recent_history(10).await.expect("should list").len());
    }
}
