//! Shared gesture constants
//!
//! Used by the drag tracker and the button pipeline so slop gating and
//! velocity clamping stay consistent across hosts.

/// Minimum distance in logical pixels before a drag gesture starts.
///
/// Below this threshold a pointer sequence still reads as a tap, so touch
/// jitter never nudges the button. 8.0 matches common platform touch slop
/// (Android's ViewConfiguration uses ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum pointer velocity in logical pixels per second.
///
/// Release velocities are clamped to this per axis before the end
/// translation is predicted, matching Android's default maximum fling
/// velocity at baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8000.0;
