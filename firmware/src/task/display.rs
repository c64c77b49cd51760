//! OLED readout
//!
//! Renders display frames from the measurement task on a 128x64 SSD1306:
//! a distance gauge bar along the top edge, scaled over the 0-2000mm
//! range, and a status line underneath ("Init...", "<n> mm", blank, or
//! "Out of range!").

use core::fmt::Write;

use crate::system::event;
use crate::system::resources::{DisplayResources, Irqs};
use defmt::warn;
use embassy_rp::i2c::{Config, I2c};
use embedded_graphics::{
    mono_font::{ascii::FONT_9X18_BOLD, MonoTextStyleBuilder},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;
use range_filter::{pipeline::GAUGE_RANGE_MM, DisplayFrame};
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306Async};

/// Gauge geometry on the 128px panel
const BAR_WIDTH: i32 = 128;
const BAR_HEIGHT: u32 = 12;
/// Inner fill area, inset by the 1px outline plus a 1px gap
const BAR_INSET: i32 = 2;

#[embassy_executor::task]
pub async fn display(r: DisplayResources) {
    let mut config = Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_async(r.i2c, r.scl_pin, r.sda_pin, Irqs, config);

    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().await.unwrap();

    let text_style = MonoTextStyleBuilder::new()
        .font(&FONT_9X18_BOLD)
        .text_color(BinaryColor::On)
        .build();

    // Nothing measured yet
    let mut frame = DisplayFrame::WarmUp;

    loop {
        display.clear(BinaryColor::Off).unwrap();

        // Gauge outline and fill. The fill snaps to zero outside live
        // readings; the panel has no animation, so the animate hint from
        // the pipeline is not acted on here.
        let (bar_mm, _animate) = frame.bar();
        Rectangle::new(Point::zero(), Size::new(BAR_WIDTH as u32, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();
        let fill = bar_mm * (BAR_WIDTH - 2 * BAR_INSET) / GAUGE_RANGE_MM;
        if fill > 0 {
            Rectangle::new(
                Point::new(BAR_INSET, BAR_INSET),
                Size::new(fill as u32, BAR_HEIGHT - 2 * BAR_INSET as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        }

        let mut label: String<16> = String::new();
        match frame {
            DisplayFrame::WarmUp => label.push_str("Init...").unwrap(),
            DisplayFrame::Reading { distance_mm } => {
                write!(label, "{distance_mm} mm").unwrap();
            }
            DisplayFrame::Blanked => {}
            DisplayFrame::OutOfRange => label.push_str("Out of range!").unwrap(),
        }
        if !label.is_empty() {
            Text::with_baseline(&label, Point::new(0, 24), text_style, Baseline::Top)
                .draw(&mut display)
                .unwrap();
        }

        // A failed flush only costs this frame; the next one redraws fully
        if display.flush().await.is_err() {
            warn!("display flush failed, skipping frame");
        }

        frame = event::next_frame().await;
    }
}
