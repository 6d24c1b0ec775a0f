use crate::config::tuning::{ANTI_WOBBLE_STEP, P_STEP, ROLL_PITCH_THRESHOLD, YAW_THRESHOLD};
use crate::controller::axis::Axis;

/// Sign and magnitude rule applied to two consecutive window errors.
#[derive(Clone, Copy, Debug)]
pub struct GainAdjuster {
    threshold: i32,
    increase: i32,
    decrease: i32,
    anti_wobble: bool,
}
impl GainAdjuster {
    pub fn new(axis: Axis, strength: u8) -> GainAdjuster {
        let increase = P_STEP + strength as i32;
        match axis {
            Axis::Yaw => GainAdjuster {
                threshold: YAW_THRESHOLD,
                increase,
                decrease: increase,
                anti_wobble: false,
            },
            Axis::Roll | Axis::Pitch => GainAdjuster {
                threshold: ROLL_PITCH_THRESHOLD,
                increase,
                decrease: ANTI_WOBBLE_STEP,
                anti_wobble: true,
            },
        }
    }

    /// Change to apply to the x64 gain, before clamping.
    pub fn step(&self, error: i32, previous_error: i32) -> i32 {
        let diff = error.abs() - previous_error.abs();
        let same_sign = (error > 0 && previous_error > 0) || (error < 0 && previous_error < 0);

        if same_sign {
            // error persists across windows
            if diff > self.threshold {
                self.increase
            } else if diff < -self.threshold {
                -self.decrease
            } else {
                0
            }
        } else if self.anti_wobble && diff.abs() > self.threshold {
            // error flipped, probably overshooting
            -ANTI_WOBBLE_STEP
        } else {
            0
        }
    }

    pub fn apply(&self, p64: i32, error: i32, previous_error: i32, bounds: (i32, i32)) -> i32 {
        clamp_p64(p64 + self.step(error, previous_error), bounds)
    }
}

pub fn clamp_p64(p64: i32, (low, high): (i32, i32)) -> i32 {
    p64.max(low).min(high)
}
