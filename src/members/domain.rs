pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

#[async_trait]
pub(crate) trait MemberService: Sync + Send {
    async fn register_member(&self, name: &str) -> LibraryResult<MemberDto>;
    async fn find_member(&self, name: &str) -> LibraryResult<MemberDto>;
    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>>;
    async fn find_member_books(&self, name: &str) -> LibraryResult<Vec<BookDto>>;
}
