use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::model::AddBookOutcome;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::context::{AppState, ConsoleError, ConsoleResult};
use crate::core::library::SearchType;
use crate::reports;

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.catalog.clone(), state.counters.clone())
}

pub(crate) async fn add_book(state: &AppState, req: AddBookCommandRequest) -> ConsoleResult {
    let res = AddBookCommand::new(build_service(state)).execute(req).await?;
    Ok(match res.outcome {
        AddBookOutcome::Inserted => {
            format!("✓ added 《{}》 ({} copies)\n", res.book.title, res.book.total_copies)
        }
        AddBookOutcome::Merged { added_copies } => {
            format!("✓ 《{}》 already in the catalog, added {} copies (now {})\n",
                    res.book.title, added_copies, res.book.total_copies)
        }
    })
}

pub(crate) async fn find_book_by_isbn(state: &AppState, isbn: &str) -> ConsoleResult {
    let res = GetBookCommand::new(build_service(state))
        .execute(GetBookCommandRequest::new(isbn.to_string())).await?;
    Ok(reports::render_book(&res.book))
}

// search_books runs a title, author or union search. An unrecognized mode is rejected.
pub(crate) async fn search_books(state: &AppState, keyword: &str, search_type: Option<SearchType>) -> ConsoleResult {
    if search_type == Some(SearchType::Unknown) {
        return Err(ConsoleError::new("invalid input", "search type must be title, author or all"));
    }
    let res = SearchBooksCommand::new(build_service(state))
        .execute(SearchBooksCommandRequest::new(keyword, search_type)).await?;
    Ok(reports::render_search_results(res.keyword.as_str(), &res.books))
}

pub(crate) async fn list_books(state: &AppState) -> ConsoleResult {
    let books = build_service(state).list_books().await?;
    Ok(reports::render_books(&books))
}

pub(crate) async fn statistics(state: &AppState) -> ConsoleResult {
    let svc = build_service(state);
    let stats = svc.statistics().await?;
    Ok(format!("{}{}", reports::render_library_banner(svc.library_name().await.as_str()),
               reports::render_statistics(&stats)))
}
