//! Anchor positions and drop resolution for Fabdock
//!
//! The nine rest positions of an action button on its container, and the
//! pure resolver that decides which of them a released drag settles into.

mod anchor;
mod resolver;

pub use anchor::*;
pub use resolver::*;

pub mod prelude {
    pub use crate::anchor::{Anchor, HorizontalAnchor, VerticalAnchor};
    pub use crate::resolver::{drop_candidates, drop_point, resolve_drop, DropCandidate};
}
