use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::context::{AppState, ConsoleResult};
use crate::reports;

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.catalog.clone())
}

pub(crate) async fn checkout_book(state: &AppState, req: CheckoutBookCommandRequest) -> ConsoleResult {
    let res = CheckoutBookCommand::new(build_service(state)).execute(req).await?;
    Ok(format!("✓ {} borrowed 《{}》\n", res.record.borrower, res.record.book_title))
}

pub(crate) async fn return_book(state: &AppState, req: ReturnBookCommandRequest) -> ConsoleResult {
    let res = ReturnBookCommand::new(build_service(state)).execute(req).await?;
    Ok(format!("✓ {} returned 《{}》\n", res.record.borrower, res.record.book_title))
}

// recent_history shows at most limit records, falling back to the configured limit for 0.
pub(crate) async fn recent_history(state: &AppState, limit: usize) -> ConsoleResult {
    let limit = if limit == 0 { state.config.history_limit } else { limit };
    let history = build_service(state).recent_history(limit).await?;
    Ok(reports::render_history(&history))
}
