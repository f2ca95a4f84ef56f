//! Plain data the views render. Everything here is owned by the host
//! application and handed to components on every render.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(pub i64);

impl From<i64> for PeerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerKind {
    User,
    Group,
    Channel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peer {
    pub id: PeerId,
    pub kind: PeerKind,
}

impl Peer {
    pub fn user(id: impl Into<PeerId>) -> Self {
        Self {
            id: id.into(),
            kind: PeerKind::User,
        }
    }
}

/// A member row in admin lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub peer: Peer,
    pub title: SharedString,
    pub avatar: Option<SharedString>,
}

/// A candidate that can be added to a new group or channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub peer: Peer,
    pub title: SharedString,
    pub avatar: Option<SharedString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserializes_from_host_json() {
        let member: ChatMember = serde_json::from_str(
            r#"{ "peer": { "id": 42, "kind": "user" }, "title": "Ada Lovelace", "avatar": null }"#,
        )
        .unwrap();

        assert_eq!(member.peer, Peer::user(42));
        assert_eq!(member.title.as_ref(), "Ada Lovelace");
        assert!(member.avatar.is_none());
    }
}
