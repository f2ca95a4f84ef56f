//! Design tokens shared by every view: a dark and a light palette plus the
//! sizes, radii, padding and type scale they are laid out with.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
