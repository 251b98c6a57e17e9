//! Pointer tracking and fling prediction for Fabdock
//!
//! Everything between raw pointer positions and the predicted end
//! translation a drop resolver consumes: velocity tracking, fling decay
//! physics, touch-slop gating, and the per-gesture drag tracker that ties
//! them together.

mod clock;
mod constants;
mod drag;
mod event;
mod fling;
mod velocity;

pub use clock::*;
pub use constants::*;
pub use drag::*;
pub use event::*;
pub use fling::*;
pub use velocity::*;
