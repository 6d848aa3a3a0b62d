use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// MemberDto is a registered member together with the number of titles they hold right now.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberDto {
    pub name: String,
    pub borrowed_count: usize,
}

impl MemberDto {
    pub(crate) fn new(name: &str, borrowed_count: usize) -> Self {
        Self {
            name: name.to_string(),
            borrowed_count,
        }
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.name.to_string()
    }
}
