//! Emoji metadata: where each glyph lives in the shared sprite sheet and
//! whether the platform can draw it natively.

mod catalog;
pub use catalog::*;

mod support;
pub use support::*;
