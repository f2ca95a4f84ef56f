mod focus_ring;
pub use focus_ring::*;

mod truncated_text;
pub use truncated_text::*;
