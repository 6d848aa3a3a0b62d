use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookFields};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::AddBookOutcome;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) publisher: Option<String>,
    pub(crate) year: Option<i32>,
    pub(crate) copies: Option<u32>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publisher: None,
            year: None,
            copies: None,
        }
    }

    pub fn with_details(mut self, publisher: Option<String>, year: Option<i32>, copies: Option<u32>) -> Self {
        self.publisher = publisher;
        self.year = year;
        self.copies = copies;
        self
    }

    pub fn build_fields(&self) -> BookFields {
        BookFields {
            title: self.title.to_string(),
            author: self.author.to_string(),
            isbn: self.isbn.to_string(),
            publisher: self.publisher.clone(),
            year: self.year,
            copies: self.copies,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
    pub outcome: AddBookOutcome,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto, outcome: AddBookOutcome) -> Self {
        Self {
            book,
            outcome,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let fields = req.build_fields();
        self.catalog_service.create_and_add_book(&fields).await
            .map_err(CommandError::from).map(|(book, outcome)| AddBookCommandResponse::new(book, outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::model::AddBookOutcome;
    use crate::catalog::factory::{create_catalog_service, create_library};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Counters};

    fn build_command() -> AddBookCommand {
        let config = Configuration::new("test");
        let counters = Arc::new(Counters::new());
        let catalog = create_library(&config, &counters);
        AddBookCommand::new(create_catalog_service(&config, catalog, counters))
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = build_command();

        let req = AddBookCommandRequest::new("算法导论", "托马斯·科尔曼", "978-7-111-40701-0")
            .with_details(Some("机械工业出版社".to_string()), Some(2013), Some(2));
        let res = cmd.execute(req).await.expect("should add book");
        assert_eq!(AddBookOutcome::Inserted, res.outcome);
        assert_eq!("机械工业出版社", res.book.publisher.as_str());
        assert_eq!(2, res.book.total_copies);

        let res = cmd.execute(AddBookCommandRequest::new("算法导论", "托马斯·科尔曼", "978-7-111-40701-0"))
            .await.expect("should merge book");
        assert_eq!(AddBookOutcome::Merged { added_copies: 1 }, res.outcome);
        assert_eq!(3, res.book.total_copies);
    }

    #[tokio::test]
    async fn test_should_fail_add_book_without_isbn() {
        let cmd = build_command();
        let res = cmd.execute(AddBookCommandRequest::new("算法导论", "托马斯·科尔曼", "")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_deserialize_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"title":"t","author":"a","isbn":"i","publisher":null,"year":2001,"copies":null}"#)
            .expect("should parse request");
        assert_eq!(Some(2001), req.build_fields().year);
        assert_eq!(None, req.build_fields().copies);
    }
}
