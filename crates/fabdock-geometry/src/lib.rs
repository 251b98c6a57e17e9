//! Pure math/data for drag geometry in Fabdock
//!
//! Geometry primitives, displacement types, and the layout direction shared
//! by the anchor and gesture crates. No behavior lives here; everything is
//! plain `Copy` data.

mod direction;
mod geometry;

pub use direction::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::direction::LayoutDirection;
    pub use crate::geometry::{Offset, Point, Rect, Size, Velocity};
}
