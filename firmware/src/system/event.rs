//! Display frame hand-off
//!
//! This module carries display updates from the measurement task to the
//! display task. It uses an embassy-sync Signal, so only the latest frame
//! is kept: the display never falls behind the sensor, it just skips
//! intermediate frames.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use range_filter::DisplayFrame;

/// Latest display frame produced by the measurement task
static DISPLAY_FRAME: Signal<CriticalSectionRawMutex, DisplayFrame> = Signal::new();

/// Publishes a new display frame, replacing any frame not yet rendered.
/// Synchronous operation that doesn't require awaiting.
pub fn publish(frame: DisplayFrame) {
    DISPLAY_FRAME.signal(frame);
}

/// Waits for the next display frame to render.
pub async fn next_frame() -> DisplayFrame {
    DISPLAY_FRAME.wait().await
}
