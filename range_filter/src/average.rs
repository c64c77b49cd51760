//! Outlier-rejecting average
//!
//! A single spiked reading would drag a plain mean far off the true
//! distance. Sorting the window and discarding values too far from the
//! median keeps the average robust against such spikes while staying cheap
//! for the small window sizes used here.

/// Robust mean of a sample window (millimeters).
///
/// Sorts a copy of the samples, takes the median (middle element, so N
/// should be odd), discards values whose distance from the median exceeds
/// `max_deviation_mm` and returns the integer mean of the remainder,
/// truncated toward zero.
///
/// Falls back to the median itself if nothing qualifies, so the division is
/// never degenerate. The result depends only on the set of values, not on
/// insertion order, and the arithmetic is widened to i64 so extreme inputs
/// cannot overflow.
pub fn robust_average<const N: usize>(mut samples: [i32; N], max_deviation_mm: i32) -> i32 {
    samples.sort_unstable();
    let median = samples[N / 2];

    let mut sum: i64 = 0;
    let mut kept: i64 = 0;
    for sample in samples {
        if (i64::from(sample) - i64::from(median)).abs() <= i64::from(max_deviation_mm) {
            sum += i64::from(sample);
            kept += 1;
        }
    }

    if kept == 0 {
        median
    } else {
        (sum / kept) as i32
    }
}
