use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::members::dto::MemberDto;
use crate::core::command::{Command, CommandError};
use crate::members::domain::MemberService;

pub(crate) struct AddMemberCommand {
    member_service: Box<dyn MemberService>,
}

impl AddMemberCommand {
    pub(crate) fn new(member_service: Box<dyn MemberService>) -> Self {
        Self {
            member_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddMemberCommandRequest {
    pub name: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand {
    async fn execute(&self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        self.member_service.register_member(req.name.as_str()).await
            .map_err(CommandError::from).map(AddMemberCommandResponse::new)
    }
}
