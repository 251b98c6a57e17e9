//! Fling end-point prediction.
//!
//! Android-Scroller-derived decay physics. Only the terminal distance and
//! duration matter here: the drop resolver needs to know where a fling
//! would come to rest, never the positions along the way, so the spline
//! sampling that drives decay animations is absent.

/// Deceleration rate of the fling spline, ln(0.78) / ln(0.9).
const DECELERATION_RATE: f32 = 2.358_201_6;

/// Tension lines of the fling spline cross at (INFLEXION, 1).
const INFLEXION: f32 = 0.35;

/// Earth's gravity in SI units (m/s^2).
const GRAVITY_EARTH: f32 = 9.80665;

/// Relates physical friction to a pixel-space deceleration.
fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * 39.37 * density * 160.0 * friction
}

/// Predicts how far and how long a fling at a given velocity travels.
///
/// Distances come out in logical pixels for the display density the
/// calculator was built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    magic_physical_coefficient: f32,
}

impl FlingCalculator {
    /// Scroll friction factor, matching Android's default.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            magic_physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    /// Calculator with default friction for the given display density.
    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        ((INFLEXION * velocity.abs()) as f64
            / (self.friction * self.magic_physical_coefficient) as f64)
            .ln()
    }

    /// Total distance a fling at `velocity` travels before stopping.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        ((self.friction * self.magic_physical_coefficient) as f64
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp()) as f32
    }

    /// How long a fling at `velocity` lasts, in milliseconds.
    pub fn fling_duration(&self, velocity: f32) -> i64 {
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Signed displacement from release to rest.
    pub fn fling_displacement(&self, velocity: f32) -> f32 {
        self.fling_distance(velocity) * velocity.signum()
    }
}

impl Default for FlingCalculator {
    /// Default friction at baseline density.
    fn default() -> Self {
        Self::with_density(1.0)
    }
}
