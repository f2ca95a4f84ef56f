#![allow(missing_docs)] // Derive macros generate undocumented methods.

//! User-facing strings.
//!
//! Every label has a stable id and an English default. Hosts that translate
//! their UI install a [`LabelOverrides`] global keyed by id.

use std::collections::HashMap;

use enum_assoc::Assoc;
use gpui::{App, Global, SharedString};

#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[func(pub fn id(&self) -> &'static str)]
#[func(pub fn english(&self) -> &'static str)]
pub enum Label {
    #[assoc(id = "CreateNewModal.group.title", english = "Create group")]
    GroupTitle,
    #[assoc(id = "CreateNewModal.channel.title", english = "Create channel")]
    ChannelTitle,
    #[assoc(id = "CreateNewModal.next.type", english = "Next")]
    NextType,
    #[assoc(id = "CreateNewModal.next.info", english = "Add members")]
    NextInfo,
    #[assoc(id = "CreateNewModal.group.finish", english = "Create group")]
    GroupFinish,
    #[assoc(id = "CreateNewModal.channel.finish", english = "Create channel")]
    ChannelFinish,
    #[assoc(id = "CreateNewModal.avatar_edit", english = "Edit photo")]
    AvatarEdit,
    #[assoc(id = "CreateNewType.group", english = "Group")]
    TypeGroup,
    #[assoc(
        id = "CreateNewType.group.hint",
        english = "Everyone can write and invite new members."
    )]
    TypeGroupHint,
    #[assoc(id = "CreateNewType.channel", english = "Channel")]
    TypeChannel,
    #[assoc(
        id = "CreateNewType.channel.hint",
        english = "Only admins post, subscribers read."
    )]
    TypeChannelHint,
    #[assoc(id = "CreateNewInfo.title", english = "Title")]
    InfoTitle,
    #[assoc(id = "CreateNewInfo.about", english = "Description")]
    InfoAbout,
    #[assoc(id = "CreateNewInfo.shortname", english = "Short name")]
    InfoShortname,
    #[assoc(id = "CreateNewInfo.avatar.remove", english = "Remove photo")]
    AvatarRemove,
    #[assoc(id = "CreateNewMembers.empty", english = "No contacts to add yet.")]
    MembersEmpty,
    #[assoc(id = "ImageEdit.submit", english = "Done")]
    ImageEditSubmit,
}

impl Label {
    /// Resolves the label text, preferring the host's override.
    pub fn resolve(&self, cx: &App) -> SharedString {
        cx.try_global::<LabelOverrides>()
            .and_then(|overrides| overrides.get(self.id()))
            .cloned()
            .unwrap_or_else(|| self.english().into())
    }
}

/// Translated label texts, keyed by [`Label::id`].
#[derive(Clone, Debug, Default)]
pub struct LabelOverrides(HashMap<String, SharedString>);

impl LabelOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<SharedString>) {
        self.0.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&SharedString> {
        self.0.get(id)
    }
}

impl FromIterator<(String, SharedString)> for LabelOverrides {
    fn from_iter<T: IntoIterator<Item = (String, SharedString)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Global for LabelOverrides {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let all = [
            Label::GroupTitle,
            Label::ChannelTitle,
            Label::NextType,
            Label::NextInfo,
            Label::GroupFinish,
            Label::ChannelFinish,
            Label::AvatarEdit,
            Label::TypeGroup,
            Label::TypeGroupHint,
            Label::TypeChannel,
            Label::TypeChannelHint,
            Label::InfoTitle,
            Label::InfoAbout,
            Label::InfoShortname,
            Label::AvatarRemove,
            Label::MembersEmpty,
            Label::ImageEditSubmit,
        ];

        let ids: std::collections::HashSet<_> = all.iter().map(Label::id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_overrides_lookup_by_id() {
        let mut overrides = LabelOverrides::new();
        overrides.insert("CreateNewModal.next.type", "Weiter");

        assert_eq!(
            overrides.get(Label::NextType.id()).map(|s| s.as_ref()),
            Some("Weiter")
        );
        assert!(overrides.get(Label::NextInfo.id()).is_none());
    }
}
