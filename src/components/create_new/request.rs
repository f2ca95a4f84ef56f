use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use gpui::{ImageSource, SharedString};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{DialogIconKind, entities::PeerId, labels::Label};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateNewKind {
    #[default]
    Group,
    Channel,
}

impl CreateNewKind {
    pub fn title_label(&self) -> Label {
        match self {
            CreateNewKind::Group => Label::GroupTitle,
            CreateNewKind::Channel => Label::ChannelTitle,
        }
    }

    pub fn finish_label(&self) -> Label {
        match self {
            CreateNewKind::Group => Label::GroupFinish,
            CreateNewKind::Channel => Label::ChannelFinish,
        }
    }

    pub fn glyph(&self) -> DialogIconKind {
        match self {
            CreateNewKind::Group => DialogIconKind::Group,
            CreateNewKind::Channel => DialogIconKind::Channel,
        }
    }
}

/// An image picked on this machine that has not been uploaded yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalImage {
    path: Arc<Path>,
}

impl LocalImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image_source(&self) -> ImageSource {
        ImageSource::from(self.path.clone())
    }
}

/// The draft's avatar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Avatar {
    #[default]
    Unset,
    /// Already uploaded, referenced by URL.
    Stored(SharedString),
    /// Chosen locally, still needs editing and upload.
    Pending(LocalImage),
}

impl Avatar {
    pub fn pending(&self) -> Option<&LocalImage> {
        match self {
            Avatar::Pending(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Avatar::Unset)
    }

    pub fn image_source(&self) -> Option<ImageSource> {
        match self {
            Avatar::Unset => None,
            Avatar::Stored(url) => Some(ImageSource::from(url.clone())),
            Avatar::Pending(image) => Some(image.image_source()),
        }
    }
}

/// Text fields of the info step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreateNewField {
    Title,
    About,
    Shortname,
}

/// Draft of a group or channel that is being created.
///
/// Edits never mutate a draft in place, the `with_*` helpers return the
/// updated copy that is handed back to the owner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateNewRequest {
    pub kind: CreateNewKind,
    pub title: SharedString,
    pub about: SharedString,
    pub shortname: SharedString,
    pub avatar: Avatar,
    pub members: IndexSet<PeerId>,
}

impl CreateNewRequest {
    pub fn new(kind: CreateNewKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_kind(&self, kind: CreateNewKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    pub fn with_field(&self, field: CreateNewField, value: impl Into<SharedString>) -> Self {
        let mut request = self.clone();
        let value = value.into();

        match field {
            CreateNewField::Title => request.title = value,
            CreateNewField::About => request.about = value,
            CreateNewField::Shortname => request.shortname = value,
        }

        request
    }

    pub fn field(&self, field: CreateNewField) -> &SharedString {
        match field {
            CreateNewField::Title => &self.title,
            CreateNewField::About => &self.about,
            CreateNewField::Shortname => &self.shortname,
        }
    }

    pub fn with_avatar(&self, avatar: Avatar) -> Self {
        Self {
            avatar,
            ..self.clone()
        }
    }

    /// Adds `peer` when absent, removes it otherwise.
    pub fn with_member_toggled(&self, peer: PeerId) -> Self {
        let mut request = self.clone();

        if !request.members.shift_remove(&peer) {
            request.members.insert(peer);
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_helpers_leave_original_untouched() {
        let draft = CreateNewRequest::new(CreateNewKind::Channel);
        let titled = draft.with_field(CreateNewField::Title, "Releases");

        assert_eq!(draft.title.as_ref(), "");
        assert_eq!(titled.title.as_ref(), "Releases");
        assert_eq!(titled.kind, CreateNewKind::Channel);
    }

    #[test]
    fn test_member_toggle_keeps_insertion_order() {
        let draft = CreateNewRequest::default()
            .with_member_toggled(PeerId(3))
            .with_member_toggled(PeerId(1))
            .with_member_toggled(PeerId(2))
            .with_member_toggled(PeerId(1));

        assert_eq!(
            draft.members.iter().copied().collect::<Vec<_>>(),
            [PeerId(3), PeerId(2)]
        );
    }

    #[test]
    fn test_avatar_accessors() {
        let image = LocalImage::new("/tmp/photo.png");

        assert!(Avatar::Pending(image.clone()).pending().is_some());
        assert!(Avatar::Stored("https://cdn/avatar.png".into()).pending().is_none());
        assert!(!Avatar::Unset.is_set());
        assert!(Avatar::Unset.image_source().is_none());
        assert_eq!(image.path(), Path::new("/tmp/photo.png"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CreateNewKind::Group.title_label(), Label::GroupTitle);
        assert_eq!(CreateNewKind::Channel.finish_label(), Label::ChannelFinish);
    }
}
