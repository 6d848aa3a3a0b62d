use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory::{create_catalog_service, create_sample_library};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Counters};

    fn build_command() -> GetBookCommand {
        let config = Configuration::new("test");
        let counters = Arc::new(Counters::new());
        let catalog = create_sample_library(&config, &counters).expect("should create sample");
        GetBookCommand::new(create_catalog_service(&config, catalog, counters))
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let cmd = build_command();
        let res = cmd.execute(GetBookCommandRequest::new("978-7-111-51946-1".to_string()))
            .await.expect("should get book");
        assert_eq!("机器学习", res.book.title.as_str());
        assert_eq!("周志华", res.book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let cmd = build_command();
        let res = cmd.execute(GetBookCommandRequest::new("missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
