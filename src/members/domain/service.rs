use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::SharedCatalog;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::members::domain::MemberService;
use crate::members::dto::MemberDto;

pub(crate) struct MemberServiceImpl {
    catalog: SharedCatalog,
}

impl MemberServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog: SharedCatalog) -> Self {
        MemberServiceImpl {
            catalog,
        }
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn register_member(&self, name: &str) -> LibraryResult<MemberDto> {
        let mut catalog = self.catalog.lock().await;
        match catalog.register_member(name) {
            Ok(registered) => {
                info!(member = registered.as_str(), "registered member");
                Ok(MemberDto::new(registered.as_str(), 0))
            }
            Err(err) => {
                warn!(member = name, "rejected member registration: {}", err);
                Err(err)
            }
        }
    }

    async fn find_member(&self, name: &str) -> LibraryResult<MemberDto> {
        let catalog = self.catalog.lock().await;
        if !catalog.is_member(name) {
            return Err(LibraryError::not_found(format!("member {} is not registered", name).as_str()));
        }
        Ok(MemberDto::new(name, catalog.borrowed_count(name)))
    }

    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.members().map(|m| MemberDto::new(m.as_str(), catalog.borrowed_count(m.as_str()))).collect())
    }

    async fn find_member_books(&self, name: &str) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.catalog.lock().await;
        let books = catalog.books_borrowed_by(name)?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}
