mod button;
pub use button::*;

mod checkbox;
pub use checkbox::*;

mod icon;
pub use icon::*;

mod text_field;
pub use text_field::*;

mod avatar;
pub use avatar::*;

mod modal;
pub use modal::*;

mod emoji;
pub use emoji::*;

mod call_controls;
pub use call_controls::*;

mod admin_user_list;
pub use admin_user_list::*;

mod image_edit;
pub use image_edit::*;

pub mod create_new;
