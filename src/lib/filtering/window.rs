// Block (tumbling) average of gyro samples with a settle countdown in front of it.
// Unlike the sliding SMA, a window is consumed when it completes and the next one
// starts empty.

use crate::config::tuning::{SETTLE_TICKS, WINDOW_TICKS};

pub type GyroWindow = WindowAccumulator<{ WINDOW_TICKS }>;

/// Chop `sample` down to a multiple of `quantum`, truncating towards zero.
/// Anything smaller than one quantum is treated as jitter and dropped.
pub fn quantize(sample: i16, quantum: i16) -> i32 {
    let quantum = quantum as i32;
    quantum * (sample as i32 / quantum)
}

pub struct WindowAccumulator<const LEN: i8> {
    // < 0 settling, >= 0 samples in the current window
    ticks: i8,
    sum: i32,
    quantum: i16,
}
impl<const LEN: i8> WindowAccumulator<LEN> {
    // rejects LEN <= 0 at compile time
    const NON_EMPTY: () = assert!(LEN > 0, "window length must be positive");

    pub fn new(quantum: i16) -> WindowAccumulator<LEN> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        WindowAccumulator {
            ticks: SETTLE_TICKS,
            sum: 0,
            quantum: quantum.max(1),
        }
    }

    // restart the settle countdown, any partial window is dropped
    pub fn settle(&mut self) {
        self.ticks = SETTLE_TICKS;
    }

    pub fn ticks(&self) -> i8 {
        self.ticks
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }

    /// Feed one sample. Returns the window average once `LEN` samples have been
    /// collected; samples arriving during the settle countdown are ignored.
    pub fn insert(&mut self, sample: i16) -> Option<i32> {
        if self.ticks == 0 {
            self.sum = 0;
        }
        self.ticks += 1;
        if self.ticks > 0 {
            self.sum += quantize(sample, self.quantum);
        }

        if self.ticks == LEN {
            let average = self.sum / LEN as i32;
            self.ticks = 0;
            self.sum = 0;
            Some(average)
        } else {
            None
        }
    }
}
