//! The group/channel creation wizard.
//!
//! [`CreateNewStep::apply`] holds the step machine and is pure, the views
//! only translate clicks into [`CreateNewIntent`]s.

mod info_step;
mod members_step;
mod modal;
mod request;
mod step;
mod type_step;

pub use info_step::*;
pub use members_step::*;
pub use modal::*;
pub use request::*;
pub use step::*;
pub use type_step::*;
