use fugit::MicrosDurationU32;
use num_traits::Float;

use crate::config::tuning::NOMINAL_CYCLE_TIME;

/// Control loop period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleTime(MicrosDurationU32);
impl CycleTime {
    pub const fn from_micros(us: u32) -> CycleTime {
        CycleTime(MicrosDurationU32::from_ticks(us))
    }

    pub fn duration(&self) -> MicrosDurationU32 {
        self.0
    }

    pub fn as_secs<ItemT: Float>(&self) -> ItemT {
        ItemT::from(self.duration().ticks() as f64 * 1e-6).unwrap_or_else(ItemT::zero)
    }
}
impl Default for CycleTime {
    fn default() -> CycleTime {
        CycleTime(NOMINAL_CYCLE_TIME)
    }
}
impl From<MicrosDurationU32> for CycleTime {
    fn from(duration: MicrosDurationU32) -> CycleTime {
        CycleTime(duration)
    }
}

// Anything that knows how long the last loop iteration took
pub trait CycleTimer {
    fn cycle_time(&self) -> CycleTime;
}

impl CycleTimer for CycleTime {
    fn cycle_time(&self) -> CycleTime {
        *self
    }
}
