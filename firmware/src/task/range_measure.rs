//! Range measurement and indicator control
//!
//! Reads the ultrasonic range sensor on a fixed interval and drives one
//! signal-conditioning tick per reading: sample window, outlier-rejecting
//! average, exponential smoothing and the distance-band indicator decision
//! all live in the [`Pipeline`] owned by this task.
//!
//! # Sensor Operation
//! - Uses async HC-SR04 driver for non-blocking measurements
//! - Measurements taken every 50ms
//! - Readings converted to millimeters for the pipeline
//! - Assumes fixed ambient temperature of 21.5°C
//!
//! # Error Handling
//! - Failed measurements are treated as invalid readings: the tick runs
//!   out-of-range (LED off, display cleared) and no filter state is touched,
//!   so the estimate recovers on the next good reading

use crate::system::event;
use crate::system::resources::{IndicatorLedResources, RangeSensorResources};
use defmt::{info, warn};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Duration, Instant, Timer};
use hcsr04_async::{Config, DistanceUnit, Hcsr04, TemperatureUnit};
use range_filter::Pipeline;

/// Time between measurements (50ms keeps the blink timing responsive while
/// leaving the sensor time to settle)
const MEASUREMENT_INTERVAL: Duration = Duration::from_millis(50);

/// Fixed ambient temperature for distance calculations
/// Slight inaccuracy acceptable as we care more about consistent readings
const TEMPERATURE: f64 = 21.5;

/// Measurement task that runs the signal-conditioning pipeline once per
/// sensor reading, sets the indicator LED and publishes display frames.
#[embassy_executor::task]
pub async fn range_measure(r: RangeSensorResources, l: IndicatorLedResources) {
    // Configure sensor for centimeter measurements
    let config: Config = Config {
        distance_unit: DistanceUnit::Centimeters,
        temperature_unit: TemperatureUnit::Celsius,
    };

    // Initialize sensor with trigger and echo pins
    let trigger = Output::new(r.trigger_pin, Level::Low);
    let echo = Input::new(r.echo_pin, Pull::None);
    let mut sensor = Hcsr04::new(trigger, echo, config);

    let mut led = Output::new(l.led_pin, Level::Low);
    let mut pipeline = Pipeline::new();
    let mut last_frame = None;

    loop {
        // A measurement error (typically an echo timeout with nothing in
        // range) counts as an invalid reading, not a fatal condition.
        let (raw_mm, valid) = match sensor.measure(TEMPERATURE).await {
            Ok(distance_cm) => ((distance_cm * 10.0) as i32, true),
            Err(_) => {
                warn!("range measurement failed, treating reading as invalid");
                (0, false)
            }
        };

        let output = pipeline.update(raw_mm, valid, Instant::now().as_millis());
        led.set_level(Level::from(output.led_on));

        if last_frame != Some(output.frame) {
            info!("display frame changed: {}", output.frame);
            last_frame = Some(output.frame);
        }
        event::publish(output.frame);

        // Wait before next measurement
        Timer::after(MEASUREMENT_INTERVAL).await;
    }
}
