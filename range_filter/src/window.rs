//! Fixed-capacity sample window
//!
//! Keeps the last N raw readings in a circular buffer. Recording never
//! rejects a value, even duplicates or extremes - filtering happens
//! downstream in the averager.

/// Circular buffer over the last N raw distance samples (millimeters).
///
/// The window exposes its contents only once N samples have been accepted;
/// until then the pipeline treats the system as warming up rather than
/// averaging over uninitialized slots.
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    slots: [i32; N],
    cursor: usize,
    filled: usize,
}

impl<const N: usize> SampleWindow<N> {
    pub const fn new() -> Self {
        Self {
            slots: [0; N],
            cursor: 0,
            filled: 0,
        }
    }

    /// Overwrites the oldest slot and advances the write cursor. Cannot fail.
    pub fn record(&mut self, sample_mm: i32) {
        self.slots[self.cursor] = sample_mm;
        self.cursor = (self.cursor + 1) % N;
        if self.filled < N {
            self.filled += 1;
        }
    }

    pub fn is_full(&self) -> bool {
        self.filled == N
    }

    /// Returns a copy of the buffered samples once the window is full.
    ///
    /// Insertion order is preserved but irrelevant to callers; the averager
    /// re-sorts its own copy.
    pub fn samples(&self) -> Option<[i32; N]> {
        self.is_full().then_some(self.slots)
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_partial_windows_yield_no_samples() {
        let mut window = SampleWindow::<3>::new();
        assert!(window.samples().is_none());
        window.record(100);
        window.record(200);
        assert!(!window.is_full());
        assert!(window.samples().is_none());
    }

    #[test]
    fn full_window_yields_all_samples() {
        let mut window = SampleWindow::<3>::new();
        window.record(100);
        window.record(200);
        window.record(300);
        assert!(window.is_full());
        assert_eq!(window.samples(), Some([100, 200, 300]));
    }

    #[test]
    fn recording_past_capacity_overwrites_oldest() {
        let mut window = SampleWindow::<3>::new();
        for sample in [100, 200, 300, 400] {
            window.record(sample);
        }
        assert_eq!(window.samples(), Some([400, 200, 300]));
    }

    #[test]
    fn extremes_and_duplicates_are_recorded_unfiltered() {
        let mut window = SampleWindow::<3>::new();
        window.record(i32::MAX);
        window.record(i32::MAX);
        window.record(i32::MIN);
        assert_eq!(window.samples(), Some([i32::MAX, i32::MAX, i32::MIN]));
    }
}
