use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::core::events::HistoryRecord;

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    isbn: String,
    borrower: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: String, borrower: String) -> Self {
        Self {
            isbn,
            borrower,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub record: HistoryRecord,
}

impl ReturnBookCommandResponse {
    pub fn new(record: HistoryRecord) -> Self {
        Self {
            record,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.return_book(req.isbn.as_str(), req.borrower.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::factory::create_sample_library;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Counters};
    use crate::core::library::HistoryAction;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let config = Configuration::new("test");
        let catalog = create_sample_library(&config, &Arc::new(Counters::new())).expect("should create sample");
        let checkout_cmd = CheckoutBookCommand::new(create_checkout_service(&config, catalog.clone()));
        let return_cmd = ReturnBookCommand::new(create_checkout_service(&config, catalog.clone()));

        let res = return_cmd.execute(ReturnBookCommandRequest::new(
            "978-7-115-42802-8".to_string(), "张三".to_string())).await.expect("should return book");
        assert_eq!(HistoryAction::Return, res.record.action);
        assert_eq!("张三", res.record.borrower.as_str());

        let res = return_cmd.execute(ReturnBookCommandRequest::new(
            "978-7-115-42802-8".to_string(), "张三".to_string())).await;
        assert!(matches!(res, Err(CommandError::Conflict { .. })));

        let _ = checkout_cmd.execute(CheckoutBookCommandRequest::new(
            "978-7-115-42802-8".to_string(), "张三".to_string())).await.expect("should checkout again");
        assert_eq!(5, catalog.lock().await.history().len());
    }

    #[tokio::test]
    async fn test_should_not_return_unknown_book() {
        let config = Configuration::new("test");
        let catalog = create_sample_library(&config, &Counters::new()).expect("should create sample");
        let return_cmd = ReturnBookCommand::new(create_checkout_service(&config, catalog));
        let res = return_cmd.execute(ReturnBookCommandRequest::new("missing".to_string(), "张三".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
