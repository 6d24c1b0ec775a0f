// Single pole (PT1) low pass filter.
// state += dt / (RC + dt) * (input - state), RC = 1 / (2 * pi * f_cut)

use num_traits::{Float, FloatConst};

use crate::timing::{CycleTime, CycleTimer};

/// Filter one sample into `state` and return the new state. Callers keep one
/// state per signal. A cutoff of 0 Hz leaves the state untouched.
pub fn apply_pt1<ItemT>(
    input: ItemT,
    state: &mut ItemT,
    f_cut_hz: ItemT,
    cycle_time: CycleTime,
) -> ItemT
where
    ItemT: Float + FloatConst,
{
    let dt: ItemT = cycle_time.as_secs();
    let two = ItemT::one() + ItemT::one();
    let rc = ItemT::one() / (two * ItemT::PI() * f_cut_hz);
    *state = *state + dt / (rc + dt) * (input - *state);
    *state
}

pub struct Pt1Filter<ItemT> {
    state: ItemT,
}
impl<ItemT> Pt1Filter<ItemT>
where
    ItemT: Float + FloatConst,
{
    pub fn new() -> Pt1Filter<ItemT> {
        Pt1Filter::default()
    }

    pub fn reset(&mut self) {
        self.state = ItemT::zero();
    }

    pub fn state(&self) -> ItemT {
        self.state
    }

    pub fn apply<C: CycleTimer>(&mut self, input: ItemT, f_cut_hz: ItemT, timer: &C) -> ItemT {
        apply_pt1(input, &mut self.state, f_cut_hz, timer.cycle_time())
    }
}
impl<ItemT> Default for Pt1Filter<ItemT>
where
    ItemT: Float,
{
    fn default() -> Pt1Filter<ItemT> {
        Pt1Filter {
            state: ItemT::zero(),
        }
    }
}
