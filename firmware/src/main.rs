//! Proximity indicator firmware entry point
//!
//! Initializes system and spawns the measurement and display tasks.

#![no_std]
#![no_main]

use crate::task::{display::display, range_measure::range_measure};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{
    AssignedResources, DisplayResources, IndicatorLedResources, RangeSensorResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups, one per task.
    let r = split_resources!(p);

    // Spawn the display first so the measurement task never publishes into
    // the void, then start measuring.
    spawner.spawn(display(r.display)).unwrap();
    spawner
        .spawn(range_measure(r.range_sensor, r.indicator_led))
        .unwrap();
}
