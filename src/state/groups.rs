use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A chat group listed on the groups screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Group {
    pub name: String,
    /// Human readable attendance, e.g. `30+ Rams Online`.
    pub members: String,
    /// Initials shown as stacked avatars.
    pub avatars: Vec<String>,
    /// Whether the group is live right now.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("unknown group `{0}`")]
    UnknownGroup(String),
}

/// Groups of the event and the chat currently opened, if any.
#[derive(Debug, Clone)]
pub struct GroupBoard {
    groups: Vec<Group>,
    open: Option<usize>,
}

impl GroupBoard {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups, open: None }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Group whose chat is open.
    pub fn open_group(&self) -> Option<&Group> {
        self.open.and_then(|index| self.groups.get(index))
    }

    /// Open the chat of the group called `name`, replacing any open chat.
    pub fn open(&mut self, name: &str) -> Result<&Group, GroupError> {
        let index = self
            .groups
            .iter()
            .position(|group| group.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GroupError::UnknownGroup(name.to_string()))?;
        self.open = Some(index);
        Ok(&self.groups[index])
    }

    /// Go back to the group list.
    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GroupBoard {
        GroupBoard::new(vec![
            Group {
                name: "DONGMINATION".into(),
                members: "30+ Rams Online".into(),
                avatars: vec!["D".into()],
                active: true,
            },
            Group {
                name: "AI Innovators".into(),
                members: "4/6 Rams".into(),
                avatars: vec!["A".into()],
                active: false,
            },
        ])
    }

    #[test]
    fn opens_and_closes_a_group() {
        let mut board = board();
        assert!(board.open_group().is_none());

        let group = board.open("ai innovators").unwrap();
        assert_eq!(group.name, "AI Innovators");
        assert!(!group.active);
        assert_eq!(board.open_group().unwrap().name, "AI Innovators");

        board.close();
        assert!(board.open_group().is_none());
    }

    #[test]
    fn unknown_group_keeps_current_selection() {
        let mut board = board();
        board.open("DONGMINATION").unwrap();

        let err = board.open("Crypto Enthusiast").unwrap_err();
        assert_eq!(err, GroupError::UnknownGroup("Crypto Enthusiast".into()));
        assert_eq!(board.open_group().unwrap().name, "DONGMINATION");
    }
}
