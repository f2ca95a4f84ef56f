use gpui::SharedString;
use smallvec::{SmallVec, smallvec};

use super::{Avatar, CreateNewField, CreateNewKind, CreateNewRequest, LocalImage};
use crate::{entities::PeerId, labels::Label};

/// Page of the creation wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CreateNewStep {
    #[default]
    Type,
    Info,
    Avatar,
    Members,
}

/// Something the user asked the wizard to do.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateNewIntent {
    Next,
    Prev,
    EditAvatar(Avatar),
    CancelAvatarEdit,
    SubmitAvatar(LocalImage),
    RemoveAvatar,
    ChooseKind(CreateNewKind),
    EditField(CreateNewField, SharedString),
    ToggleMember(PeerId),
    Submit,
    Close,
}

/// What the owner of the wizard state has to do in response to an intent,
/// in order.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateNewEffect {
    ChangeStep(CreateNewStep),
    ChangeRequest(CreateNewRequest),
    Submit(CreateNewRequest),
    Close,
}

pub type CreateNewEffects = SmallVec<[CreateNewEffect; 2]>;

impl CreateNewStep {
    pub fn next(self) -> Option<Self> {
        match self {
            CreateNewStep::Type => Some(CreateNewStep::Info),
            CreateNewStep::Info => Some(CreateNewStep::Members),
            CreateNewStep::Avatar | CreateNewStep::Members => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            CreateNewStep::Info => Some(CreateNewStep::Type),
            CreateNewStep::Members => Some(CreateNewStep::Info),
            CreateNewStep::Type | CreateNewStep::Avatar => None,
        }
    }

    /// Header title of this step.
    pub fn title_label(self, kind: CreateNewKind) -> Label {
        match self {
            CreateNewStep::Avatar => Label::AvatarEdit,
            _ => kind.title_label(),
        }
    }

    /// Footer button label, `None` for steps without a footer.
    pub fn footer_label(self, kind: CreateNewKind) -> Option<Label> {
        match self {
            CreateNewStep::Type => Some(Label::NextType),
            CreateNewStep::Info => Some(Label::NextInfo),
            CreateNewStep::Members => Some(kind.finish_label()),
            CreateNewStep::Avatar => None,
        }
    }

    pub fn has_back(self) -> bool {
        self != CreateNewStep::Type
    }

    pub fn shows_error(self) -> bool {
        matches!(self, CreateNewStep::Info | CreateNewStep::Avatar)
    }

    /// Applies `intent` to the wizard at this step. Intents that make no
    /// sense here yield no effects.
    pub fn apply(self, request: &CreateNewRequest, intent: CreateNewIntent) -> CreateNewEffects {
        use CreateNewIntent as I;
        use CreateNewStep as S;

        let effects: CreateNewEffects = match (self, intent) {
            (_, I::Close) => smallvec![CreateNewEffect::Close],

            (step, I::Next) => step
                .next()
                .map(CreateNewEffect::ChangeStep)
                .into_iter()
                .collect(),

            (S::Avatar, I::Prev) | (S::Avatar, I::CancelAvatarEdit) => {
                smallvec![CreateNewEffect::ChangeStep(S::Info)]
            }

            (step, I::Prev) => step
                .prev()
                .map(CreateNewEffect::ChangeStep)
                .into_iter()
                .collect(),

            (S::Type, I::ChooseKind(kind)) if kind != request.kind => {
                smallvec![CreateNewEffect::ChangeRequest(request.with_kind(kind))]
            }

            (S::Info, I::EditField(field, value)) if request.field(field) != &value => {
                smallvec![CreateNewEffect::ChangeRequest(
                    request.with_field(field, value)
                )]
            }

            (S::Info, I::EditAvatar(avatar @ Avatar::Pending(_))) => smallvec![
                CreateNewEffect::ChangeRequest(request.with_avatar(avatar)),
                CreateNewEffect::ChangeStep(S::Avatar),
            ],

            (S::Info, I::RemoveAvatar) if request.avatar.is_set() => {
                smallvec![CreateNewEffect::ChangeRequest(
                    request.with_avatar(Avatar::Unset)
                )]
            }

            (S::Avatar, I::SubmitAvatar(image)) => smallvec![
                CreateNewEffect::ChangeRequest(request.with_avatar(Avatar::Pending(image))),
                CreateNewEffect::ChangeStep(S::Info),
            ],

            (S::Members, I::ToggleMember(peer)) => {
                smallvec![CreateNewEffect::ChangeRequest(
                    request.with_member_toggled(peer)
                )]
            }

            (S::Members, I::Submit) => smallvec![CreateNewEffect::Submit(request.clone())],

            (step, I::EditAvatar(avatar)) => {
                if step == S::Info {
                    log::debug!("ignoring avatar edit with a non-pending avatar: {avatar:?}");
                } else {
                    log::warn!("avatar edit requested on the {step:?} step");
                }
                SmallVec::new()
            }

            (step, intent) => {
                log::debug!("ignoring {intent:?} on the {step:?} step");
                SmallVec::new()
            }
        };

        for effect in &effects {
            if let CreateNewEffect::ChangeStep(next) = effect {
                log::debug!("create-new wizard: {:?} -> {:?}", self, next);
            }
        }

        effects
    }
}
