//! Velocity tracking for release gestures.
//!
//! Impulse-strategy estimation: the velocity is recovered from the kinetic
//! energy the pointer imparted over its most recent samples, which resists
//! the jitter that plagues two-point differencing.

use fabdock_geometry::{Point, Velocity};

/// Ring buffer capacity for tracked samples.
const HISTORY_SIZE: usize = 20;

/// Samples older than this relative to the newest are ignored.
const HORIZON_MILLIS: i64 = 100;

/// A gap this long between adjacent samples means the pointer stopped
/// moving before release, so no momentum survives.
pub const ASSUME_POINTER_STOPPED_MILLIS: i64 = 40;

#[derive(Clone, Copy)]
struct DataPointAtTime {
    time: i64,
    data_point: f32,
}

/// Single-axis velocity tracker over absolute positions.
///
/// Feed it positions with non-decreasing timestamps; it answers with an
/// estimated velocity in units per second.
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<DataPointAtTime>; HISTORY_SIZE],
    index: usize,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records `data_point` observed at `time` (milliseconds).
    pub fn add_data_point(&mut self, time: i64, data_point: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(DataPointAtTime { time, data_point });
    }

    /// Estimated velocity in units per second.
    ///
    /// Returns 0.0 when fewer than two usable samples exist or the pointer
    /// had already stopped before the newest sample.
    pub fn calculate_velocity(&self) -> f32 {
        let mut data_points = [0.0f32; HISTORY_SIZE];
        let mut time = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let mut index = self.index;
        let newest = match self.samples[index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut previous_time = newest.time;
        while sample_count < HISTORY_SIZE {
            let sample = match self.samples[index] {
                Some(sample) => sample,
                None => break,
            };

            let age = newest.time - sample.time;
            let gap = previous_time - sample.time;
            if age > HORIZON_MILLIS || gap > ASSUME_POINTER_STOPPED_MILLIS {
                break;
            }
            previous_time = sample.time;

            data_points[sample_count] = sample.data_point;
            time[sample_count] = -(age as f32);
            index = if index == 0 { HISTORY_SIZE - 1 } else { index - 1 };
            sample_count += 1;
        }

        if sample_count < 2 {
            return 0.0;
        }

        // Samples are ordered newest first; times are in milliseconds.
        impulse_velocity(&data_points[..sample_count], &time[..sample_count]) * 1000.0
    }

    /// Estimated velocity clamped to `maximum_velocity` per direction.
    pub fn calculate_velocity_with_max(&self, maximum_velocity: f32) -> f32 {
        debug_assert!(maximum_velocity > 0.0, "maximum velocity must be positive");
        let velocity = self.calculate_velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        velocity.clamp(-maximum_velocity, maximum_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-axis tracker producing a [`Velocity`] from pointer positions.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time: i64, position: Point) {
        self.x.add_data_point(time, position.x);
        self.y.add_data_point(time, position.y);
    }

    pub fn calculate_velocity(&self) -> Velocity {
        Velocity::new(self.x.calculate_velocity(), self.y.calculate_velocity())
    }

    /// Velocity with each axis clamped to `maximum_velocity`.
    pub fn calculate_velocity_with_max(&self, maximum_velocity: f32) -> Velocity {
        Velocity::new(
            self.x.calculate_velocity_with_max(maximum_velocity),
            self.y.calculate_velocity_with_max(maximum_velocity),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

/// Impulse velocity over samples ordered newest first.
fn impulse_velocity(data_points: &[f32], time: &[f32]) -> f32 {
    let count = data_points.len();
    if count < 2 {
        return 0.0;
    }
    if count == 2 {
        if time[0] == time[1] {
            return 0.0;
        }
        return (data_points[0] - data_points[1]) / (time[0] - time[1]);
    }

    let mut work = 0.0f32;
    for i in (1..count).rev() {
        if time[i] == time[i - 1] {
            continue;
        }
        let v_prev = kinetic_energy_to_velocity(work);
        let delta = data_points[i] - data_points[i - 1];
        let v_curr = delta / (time[i] - time[i - 1]);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == count - 1 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// E = mv^2 / 2 with m = 1, inverted.
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
