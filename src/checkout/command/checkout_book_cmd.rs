use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::core::events::HistoryRecord;

pub(crate) struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    isbn: String,
    borrower: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(isbn: String, borrower: String) -> Self {
        Self {
            isbn,
            borrower,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub record: HistoryRecord,
}

impl CheckoutBookCommandResponse {
    pub fn new(record: HistoryRecord) -> Self {
        Self {
            record,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.borrow_book(req.isbn.as_str(), req.borrower.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_library};
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Counters};
    use crate::core::library::HistoryAction;
    use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
    use crate::members::factory::create_member_service;

    #[tokio::test]
    async fn test_should_run_checkout_book() {
        let config = Configuration::new("test");
        let counters = Arc::new(Counters::new());
        let catalog = create_library(&config, &counters);
        let member_cmd = AddMemberCommand::new(create_member_service(&config, catalog.clone()));
        let book_cmd = AddBookCommand::new(create_catalog_service(&config, catalog.clone(), counters));
        let checkout_cmd = CheckoutBookCommand::new(create_checkout_service(&config, catalog.clone()));

        let _ = member_cmd.execute(AddMemberCommandRequest::new("王五")).await.expect("should add member");
        let _ = book_cmd.execute(AddBookCommandRequest::new("深度学习", "伊恩·古德费洛", "978-7-111-55719-2"))
            .await.expect("should add book");

        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new(
            "978-7-111-55719-2".to_string(), "王五".to_string())).await.expect("should checkout book");
        assert_eq!("王五", res.record.borrower.as_str());
        assert_eq!("深度学习", res.record.book_title.as_str());
        assert_eq!(HistoryAction::Borrow, res.record.action);

        let _ = member_cmd.execute(AddMemberCommandRequest::new("赵六")).await.expect("should add member");
        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new(
            "978-7-111-55719-2".to_string(), "赵六".to_string())).await;
        assert!(matches!(res, Err(CommandError::Unavailable { retryable: true, .. })));
    }
}
