//! Signal conditioning and indicator control for a range finder
//!
//! Turns noisy distance samples into a stable millimeter estimate and an
//! indicator/display decision, one tick per sample:
//!
//! raw sample → [`SampleWindow`] → [`robust_average`] → [`ExponentialSmoother`]
//! → [`IndicatorController`] → output state
//!
//! The whole pipeline is pure logic with no peripheral or executor
//! dependencies, so it can be unit tested on the host. [`Pipeline`] owns all
//! persistent state and composes the stages; firmware feeds it one sample and
//! a monotonic timestamp per tick.

#![cfg_attr(not(test), no_std)]

pub mod average;
pub mod indicator;
pub mod pipeline;
pub mod smoother;
pub mod window;

pub use average::robust_average;
pub use indicator::{Band, IndicatorController};
pub use pipeline::{DisplayFrame, Pipeline, TickOutput};
pub use smoother::ExponentialSmoother;
pub use window::SampleWindow;
