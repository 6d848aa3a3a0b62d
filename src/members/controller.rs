use crate::core::command::Command;
use crate::core::context::{AppState, ConsoleResult};
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::members::domain::MemberService;
use crate::members::factory;
use crate::reports;

fn build_service(state: &AppState) -> Box<dyn MemberService> {
    factory::create_member_service(&state.config, state.catalog.clone())
}

pub(crate) async fn register_member(state: &AppState, name: &str) -> ConsoleResult {
    let res = AddMemberCommand::new(build_service(state))
        .execute(AddMemberCommandRequest::new(name)).await?;
    Ok(format!("✓ registered member {}\n", res.member.name))
}

pub(crate) async fn list_members(state: &AppState) -> ConsoleResult {
    let members = build_service(state).list_members().await?;
    Ok(reports::render_members(&members))
}

pub(crate) async fn member_books(state: &AppState, name: &str) -> ConsoleResult {
    let books = build_service(state).find_member_books(name).await?;
    Ok(reports::render_member_books(name, &books))
}
