pub mod primitives;

pub mod components;

pub mod theme;

pub mod emoji;

pub mod entities;

pub mod labels;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
