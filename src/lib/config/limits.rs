use core::fmt;

use crate::config::tuning::{
    DEFAULT_HIGH_LIMIT_P, DEFAULT_LOW_LIMIT_P, DEFAULT_STRENGTH, HIGH_LIMIT_MAX, LOW_LIMIT_MAX,
    LOW_LIMIT_MIN, P_FRACTION_BITS, STRENGTH_MAX,
};
use crate::controller::axis::Axis;

// Error codes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    LowLimitOutOfRange,
    HighLimitOutOfRange,
    StrengthOutOfRange,
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::LowLimitOutOfRange => write!(
                f,
                "low P limit must be within {}..={}",
                LOW_LIMIT_MIN, LOW_LIMIT_MAX
            ),
            ConfigError::HighLimitOutOfRange => {
                write!(f, "high P limit must be within 0..={}", HIGH_LIMIT_MAX)
            }
            ConfigError::StrengthOutOfRange => {
                write!(f, "strength must be within 0..={}", STRENGTH_MAX)
            }
        }
    }
}

/// Operator bounds on the visible P gain of each axis.
///
/// `high_p == 0` means the axis is never tuned. Inverted bounds are accepted
/// here and only resolved when a tuning session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuningLimits {
    low_p: [u8; 3],
    high_p: [u8; 3],
    strength: u8,
}
impl TuningLimits {
    pub fn new(
        low_p: [u8; 3],
        high_p: [u8; 3],
        strength: u8,
    ) -> Result<TuningLimits, ConfigError> {
        let mut limits = TuningLimits::default();
        for axis in Axis::ALL {
            limits.set_axis(axis, low_p[axis.index()], high_p[axis.index()])?;
        }
        limits.set_strength(strength)?;
        Ok(limits)
    }

    pub fn set_axis(&mut self, axis: Axis, low_p: u8, high_p: u8) -> Result<(), ConfigError> {
        if !(LOW_LIMIT_MIN..=LOW_LIMIT_MAX).contains(&low_p) {
            return Err(ConfigError::LowLimitOutOfRange);
        }
        if high_p > HIGH_LIMIT_MAX {
            return Err(ConfigError::HighLimitOutOfRange);
        }
        self.low_p[axis.index()] = low_p;
        self.high_p[axis.index()] = high_p;
        Ok(())
    }

    pub fn set_strength(&mut self, strength: u8) -> Result<(), ConfigError> {
        if strength > STRENGTH_MAX {
            return Err(ConfigError::StrengthOutOfRange);
        }
        self.strength = strength;
        Ok(())
    }

    pub fn low_p(&self, axis: Axis) -> u8 {
        self.low_p[axis.index()]
    }

    pub fn high_p(&self, axis: Axis) -> u8 {
        self.high_p[axis.index()]
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn is_enabled(&self, axis: Axis) -> bool {
        self.high_p[axis.index()] != 0
    }

    // bounds in the x64 fixed point domain
    pub fn p64_bounds(&self, axis: Axis) -> (i32, i32) {
        (
            (self.low_p(axis) as i32) << P_FRACTION_BITS,
            (self.high_p(axis) as i32) << P_FRACTION_BITS,
        )
    }

    pub(crate) fn disable(&mut self, axis: Axis) {
        self.high_p[axis.index()] = 0;
    }
}
impl Default for TuningLimits {
    fn default() -> TuningLimits {
        TuningLimits {
            low_p: [DEFAULT_LOW_LIMIT_P; 3],
            high_p: [DEFAULT_HIGH_LIMIT_P; 3],
            strength: DEFAULT_STRENGTH,
        }
    }
}
