use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SearchType;

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) keyword: String,
    // None searches titles and authors together
    pub(crate) search_type: Option<SearchType>,
}

impl SearchBooksCommandRequest {
    pub fn new(keyword: &str, search_type: Option<SearchType>) -> Self {
        Self {
            keyword: keyword.to_string(),
            search_type,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub keyword: String,
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(keyword: String, books: Vec<BookDto>) -> Self {
        Self {
            keyword,
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let res = match req.search_type {
            Some(search_type) => self.catalog_service.search_books(req.keyword.as_str(), search_type).await,
            None => self.catalog_service.search_all(req.keyword.as_str()).await,
        };
        res.map_err(CommandError::from).map(|books| SearchBooksCommandResponse::new(req.keyword, books))
    }
}
