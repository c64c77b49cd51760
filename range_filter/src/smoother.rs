//! Exponential smoothing of the robust average
//!
//! Single-pole low-pass filter: each update blends the new average into an
//! exponentially weighted history, so the estimate tracks real changes while
//! damping residual jitter the averager lets through.

/// Smoothing factor (0.0 - 1.0). Lower value = smoother output.
pub const DEFAULT_ALPHA: f32 = 0.15;

/// Explicit cold-start state.
///
/// The first update seeds the filter with the average as-is instead of
/// blending it into an arbitrary default, which would otherwise cause a
/// long ramp-up from nowhere.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SmootherState {
    Uninitialized,
    Running(f32),
}

/// Exponentially weighted moving average over integer millimeter inputs.
///
/// Internal state stays in floating point across updates so repeated
/// truncation cannot accumulate error; only the value handed to callers is
/// truncated to whole millimeters.
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f32,
    state: SmootherState,
}

impl ExponentialSmoother {
    pub const fn new(alpha: f32) -> Self {
        Self {
            alpha,
            state: SmootherState::Uninitialized,
        }
    }

    /// Blends a new average into the estimate and returns it truncated
    /// toward zero. The first call ever adopts `avg_mm` exactly.
    pub fn update(&mut self, avg_mm: i32) -> i32 {
        let next = match self.state {
            SmootherState::Uninitialized => avg_mm as f32,
            SmootherState::Running(prev) => self.alpha * avg_mm as f32 + (1.0 - self.alpha) * prev,
        };
        self.state = SmootherState::Running(next);
        next as i32
    }

    /// Current estimate in whole millimeters, `None` before the first update.
    pub fn distance_mm(&self) -> Option<i32> {
        match self.state {
            SmootherState::Uninitialized => None,
            SmootherState::Running(value) => Some(value as i32),
        }
    }
}

impl Default for ExponentialSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
