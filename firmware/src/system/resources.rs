//! Hardware Resource Management
//!
//! Manages and allocates hardware resources (pins, peripherals) to different
//! system components, giving each task clear ownership of what it drives.
//!
//! # Resource Groups
//! - Range Sensor: HC-SR04 ultrasonic sensor pins
//! - Indicator LED: proximity alert output pin
//! - Display: I2C bus and pins for the SSD1306 OLED

use assign_resources::assign_resources;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C0};

assign_resources! {
    /// HC-SR04 ultrasonic distance sensor pins
    range_sensor: RangeSensorResources {
        trigger_pin: PIN_15,
        echo_pin: PIN_14,
    },
    /// Proximity indicator LED pin
    indicator_led: IndicatorLedResources {
        led_pin: PIN_2,
    },
    /// SSD1306 OLED display (128x64) on I2C0
    display: DisplayResources {
        i2c: I2C0,
        scl_pin: PIN_13,
        sda_pin: PIN_12,
    },
}

bind_interrupts!(pub struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});
