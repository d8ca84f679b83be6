use serde::Serialize;
use utoipa::ToSchema;

use crate::state::groups::{Group, GroupBoard};

#[derive(Debug, Serialize, ToSchema)]
/// Payload of the groups screen.
pub struct GroupsResponse {
    pub groups: Vec<Group>,
    /// Group whose chat is open, if any.
    pub open: Option<Group>,
}

impl From<&GroupBoard> for GroupsResponse {
    fn from(board: &GroupBoard) -> Self {
        Self {
            groups: board.groups().to_vec(),
            open: board.open_group().cloned(),
        }
    }
}
