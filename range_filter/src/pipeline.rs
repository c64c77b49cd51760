//! One-tick pipeline over all signal-conditioning state
//!
//! Composes window, averager, smoother and indicator controller behind a
//! single update call. All persistent state lives here, owned by one caller
//! and mutated only by [`Pipeline::update`]; ticks that carry no trustworthy
//! reading leave every stage untouched so the estimate recovers instantly on
//! the next good sample.

use crate::average::robust_average;
use crate::indicator::{blink_period_ms, Band, IndicatorController};
use crate::smoother::{ExponentialSmoother, DEFAULT_ALPHA};
use crate::window::SampleWindow;

/// Number of raw samples the window holds (3 balances noise rejection
/// against response latency).
pub const WINDOW_SIZE: usize = 3;

/// Maximum distance from the window median before a sample is discarded
/// as a spike.
pub const MAX_DEVIATION_MM: i32 = 500;

/// Raw readings beyond this are not trusted and never reach the filter.
pub const MAX_TRUSTED_DISTANCE_MM: i32 = 1000;

/// Display gauge range.
pub const GAUGE_RANGE_MM: i32 = 2000;

/// What the display should show after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayFrame {
    /// Sample window not yet full; no estimate to show.
    WarmUp,
    /// Live smoothed distance in the mid or far band.
    Reading { distance_mm: i32 },
    /// Near band: gauge zeroed and label suppressed while the LED holds.
    Blanked,
    /// Invalid or untrusted reading.
    OutOfRange,
}

impl DisplayFrame {
    /// Gauge value in [0, [`GAUGE_RANGE_MM`]] plus an animation hint: live
    /// readings may be animated toward, everything else snaps to zero.
    pub fn bar(&self) -> (i32, bool) {
        match *self {
            DisplayFrame::Reading { distance_mm } => (distance_mm.clamp(0, GAUGE_RANGE_MM), true),
            _ => (0, false),
        }
    }
}

/// Result of one pipeline tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// Level for the indicator LED.
    pub led_on: bool,
    /// Blink period currently in effect, mid band only.
    pub blink_period_ms: Option<i32>,
    /// Display update for this tick.
    pub frame: DisplayFrame,
}

/// All signal-conditioning state, advanced one tick per raw sample.
#[derive(Debug, Default)]
pub struct Pipeline {
    window: SampleWindow<WINDOW_SIZE>,
    smoother: ExponentialSmoother,
    controller: IndicatorController,
}

impl Pipeline {
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            smoother: ExponentialSmoother::new(DEFAULT_ALPHA),
            controller: IndicatorController::new(),
        }
    }

    /// Runs one tick: raw sample in, indicator and display decision out.
    ///
    /// Readings flagged invalid by the sensor or beyond
    /// [`MAX_TRUSTED_DISTANCE_MM`] put the tick out of range: LED off,
    /// display cleared, and no filter state touched - in particular the
    /// smoother is never re-seeded, so one good reading restores normal
    /// output. While the window is still filling the tick reports
    /// [`DisplayFrame::WarmUp`] instead of averaging uninitialized slots.
    pub fn update(&mut self, raw_mm: i32, valid: bool, now_ms: u64) -> TickOutput {
        if !valid || raw_mm > MAX_TRUSTED_DISTANCE_MM {
            return TickOutput {
                led_on: false,
                blink_period_ms: None,
                frame: DisplayFrame::OutOfRange,
            };
        }

        self.window.record(raw_mm);
        let Some(samples) = self.window.samples() else {
            return TickOutput {
                led_on: false,
                blink_period_ms: None,
                frame: DisplayFrame::WarmUp,
            };
        };

        let avg_mm = robust_average(samples, MAX_DEVIATION_MM);
        let distance_mm = self.smoother.update(avg_mm);
        let led_on = self.controller.decide(distance_mm, now_ms);

        let band = Band::of(distance_mm);
        let blink_period = match band {
            Band::Mid => Some(blink_period_ms(distance_mm)),
            _ => None,
        };
        let frame = match band {
            Band::Near => DisplayFrame::Blanked,
            _ => DisplayFrame::Reading { distance_mm },
        };

        TickOutput {
            led_on,
            blink_period_ms: blink_period,
            frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warms_up_for_the_first_two_ticks() {
        let mut pipeline = Pipeline::new();
        for tick in 0..2 {
            let out = pipeline.update(500, true, tick * 50);
            assert_eq!(out.frame, DisplayFrame::WarmUp);
            assert!(!out.led_on);
        }
        let out = pipeline.update(500, true, 100);
        assert_eq!(out.frame, DisplayFrame::Reading { distance_mm: 500 });
    }

    #[test]
    fn spike_rejection_and_cold_start_end_to_end() {
        // Buffer [120, 125, 900]: the spike is rejected, the robust average
        // is 122, and the first full tick seeds the smoother with it.
        let mut pipeline = Pipeline::new();
        pipeline.update(120, true, 0);
        pipeline.update(125, true, 50);
        let out = pipeline.update(900, true, 100);

        assert_eq!(out.frame, DisplayFrame::Reading { distance_mm: 122 });
        assert_eq!(out.blink_period_ms, Some(406));
        assert!(out.led_on); // first mid-band decision toggles on
    }

    #[test]
    fn near_band_blanks_the_display_and_holds_the_led() {
        let mut pipeline = Pipeline::new();
        for tick in 0..5 {
            let out = pipeline.update(20, true, tick * 50);
            if tick >= 2 {
                assert_eq!(out.frame, DisplayFrame::Blanked);
                assert_eq!(out.blink_period_ms, None);
                assert!(out.led_on);
            }
        }
    }

    #[test]
    fn far_band_shows_the_reading_with_the_led_off() {
        let mut pipeline = Pipeline::new();
        for _ in 0..3 {
            pipeline.update(800, true, 0);
        }
        let out = pipeline.update(800, true, 50);
        assert_eq!(out.frame, DisplayFrame::Reading { distance_mm: 800 });
        assert!(!out.led_on);
        assert_eq!(out.blink_period_ms, None);
    }

    #[test]
    fn untrusted_ticks_clear_the_output_but_not_the_filter() {
        let mut pipeline = Pipeline::new();
        for tick in 0..3 {
            pipeline.update(200, true, tick * 50);
        }

        // Both an out-of-window reading and a sensor-flagged invalid one
        // produce the same safe state.
        let out = pipeline.update(1500, true, 150);
        assert_eq!(out.frame, DisplayFrame::OutOfRange);
        assert!(!out.led_on);
        let out = pipeline.update(200, false, 200);
        assert_eq!(out.frame, DisplayFrame::OutOfRange);

        // The next good tick blends per normal running smoothing: window
        // [200, 200, 400] averages to 266, and 0.15 * 266 + 0.85 * 200
        // truncates to 209. A re-seeded smoother would have jumped to 266.
        let out = pipeline.update(400, true, 250);
        assert_eq!(out.frame, DisplayFrame::Reading { distance_mm: 209 });
    }

    #[test]
    fn frame_gauge_values() {
        assert_eq!(DisplayFrame::Reading { distance_mm: 800 }.bar(), (800, true));
        assert_eq!(DisplayFrame::Blanked.bar(), (0, false));
        assert_eq!(DisplayFrame::OutOfRange.bar(), (0, false));
        assert_eq!(DisplayFrame::WarmUp.bar(), (0, false));
    }
}
