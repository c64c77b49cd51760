//! Distance bands and blink-rate control
//!
//! Maps the smoothed distance into one of three bands and derives the
//! indicator LED level from it. In the middle band the LED blinks with a
//! period proportional to the distance; toggling is driven by timestamp
//! differences rather than a tick counter, so irregular call intervals do
//! not distort the blink rate.

/// Distance at or below which the indicator is held on continuously.
pub const NEAR_LIMIT_MM: i32 = 30;

/// Distance at or above which the indicator stays off.
pub const FAR_LIMIT_MM: i32 = 300;

/// Distance band driving the indicator behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// distance <= 30 mm: indicator held on, display blanked
    Near,
    /// 30 mm < distance < 300 mm: indicator blinks, period scales with distance
    Mid,
    /// distance >= 300 mm: indicator off, display shows the live value
    Far,
}

impl Band {
    pub fn of(distance_mm: i32) -> Self {
        if distance_mm <= NEAR_LIMIT_MM {
            Band::Near
        } else if distance_mm < FAR_LIMIT_MM {
            Band::Mid
        } else {
            Band::Far
        }
    }
}

/// Blink period for a mid-band distance, interpolated linearly from
/// ~100 ms at the near edge to ~1000 ms at the far edge.
pub fn blink_period_ms(distance_mm: i32) -> i32 {
    (distance_mm - NEAR_LIMIT_MM) * 900 / 270 + 100
}

/// Blink state machine for the indicator LED.
///
/// Holds the last toggle timestamp and the current level across ticks, so a
/// band change alters the blink rate without restarting the phase.
#[derive(Debug, Clone, Default)]
pub struct IndicatorController {
    level: bool,
    last_toggle_ms: Option<u64>,
}

impl IndicatorController {
    pub const fn new() -> Self {
        Self {
            level: false,
            last_toggle_ms: None,
        }
    }

    /// Derives the LED level for a smoothed distance at time `now_ms`.
    ///
    /// Near forces the level on and Far forces it off; neither touches the
    /// blink state. Mid toggles the stored level only once the band's blink
    /// period has elapsed since the last toggle (the first mid-band decision
    /// toggles immediately) and holds it in between.
    pub fn decide(&mut self, distance_mm: i32, now_ms: u64) -> bool {
        match Band::of(distance_mm) {
            Band::Near => true,
            Band::Far => false,
            Band::Mid => {
                let period = blink_period_ms(distance_mm) as u64;
                let due = match self.last_toggle_ms {
                    None => true,
                    Some(last) => now_ms.saturating_sub(last) >= period,
                };
                if due {
                    self.level = !self.level;
                    self.last_toggle_ms = Some(now_ms);
                }
                self.level
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::of(29), Band::Near);
        assert_eq!(Band::of(30), Band::Near);
        assert_eq!(Band::of(31), Band::Mid);
        assert_eq!(Band::of(299), Band::Mid);
        assert_eq!(Band::of(300), Band::Far);
        assert_eq!(Band::of(1000), Band::Far);
    }

    #[test]
    fn blink_period_interpolates_across_the_mid_band() {
        // Integer arithmetic, evaluated left to right.
        assert_eq!(blink_period_ms(31), 103);
        assert_eq!(blink_period_ms(122), 406);
        assert_eq!(blink_period_ms(150), 500);
        assert_eq!(blink_period_ms(299), 996);
    }

    #[test]
    fn toggles_only_when_the_period_has_elapsed() {
        // Distance 150 gives a period of exactly 500 ms.
        let mut controller = IndicatorController::new();
        assert!(controller.decide(150, 0)); // first decision toggles
        assert!(controller.decide(150, 400)); // 400 < 500: hold
        assert!(!controller.decide(150, 600)); // 600 >= 500: toggle
        assert!(!controller.decide(150, 900)); // 300 < 500: hold
        assert!(controller.decide(150, 1100)); // 500 >= 500: toggle
    }

    #[test]
    fn near_and_far_force_levels_without_breaking_blink_phase() {
        let mut controller = IndicatorController::new();
        assert!(controller.decide(150, 0)); // blink level now on
        assert!(controller.decide(20, 100)); // near: forced on
        assert!(!controller.decide(500, 200)); // far: forced off
        // Back in the mid band: stored level and phase survived, so the
        // toggle at t=600 turns the level off again.
        assert!(!controller.decide(150, 600));
    }
}
