//! G-Tune: P gain tuning from windowed gyro error while the sticks are centered.

use crate::config::limits::TuningLimits;
use crate::config::tuning::{MIN_MOTORS_FOR_YAW, P_FRACTION_BITS, ROLL_PITCH_QUANTUM, YAW_QUANTUM};
use crate::controller::axis::{Axis, TickInput};
use crate::controller::gain_adjuster::GainAdjuster;
use crate::controller::pid_params::PidProfile;
use crate::filtering::window::GyroWindow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisableReason {
    /// low P limit above high P limit
    InvertedLimits,
    /// yaw authority is too weak below a quad
    TooFewMotors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Blocked,
    Settling,
    Accumulating,
    // gain is None when the window was skipped
    Evaluated { error: i32, gain: Option<u8> },
}

fn quantum(axis: Axis) -> i16 {
    match axis {
        Axis::Yaw => YAW_QUANTUM,
        Axis::Roll | Axis::Pitch => ROLL_PITCH_QUANTUM,
    }
}

pub struct AxisTuningState {
    window: GyroWindow,
    previous_error: i32,
    // visible P << 6
    p64: i32,
}

impl AxisTuningState {
    pub fn new(axis: Axis) -> AxisTuningState {
        AxisTuningState {
            window: GyroWindow::new(quantum(axis)),
            previous_error: 0,
            p64: 0,
        }
    }

    // raises gain to the low limit, safe to call again
    pub fn initialize(
        &mut self,
        axis: Axis,
        gain: &mut u8,
        limits: &mut TuningLimits,
        motor_count: u8,
    ) -> Option<DisableReason> {
        let reason = if limits.is_enabled(axis) && limits.low_p(axis) > limits.high_p(axis) {
            Some(DisableReason::InvertedLimits)
        } else if axis.is_yaw() && motor_count < MIN_MOTORS_FOR_YAW {
            Some(DisableReason::TooFewMotors)
        } else {
            None
        };
        if let Some(reason) = reason {
            log::warn!("gtune: {:?} tuning disabled ({:?})", axis, reason);
            limits.disable(axis);
        }

        if *gain < limits.low_p(axis) {
            *gain = limits.low_p(axis);
        }
        self.p64 = (*gain as i32) << P_FRACTION_BITS;
        self.reset();
        reason
    }

    pub fn update(
        &mut self,
        axis: Axis,
        input: &TickInput,
        gain: &mut u8,
        limits: &TuningLimits,
    ) -> TickOutcome {
        if input.is_blocked(axis) {
            self.reset();
            return TickOutcome::Blocked;
        }

        match self.window.insert(input.gyro_rate) {
            Some(average) => {
                // yaw gyro sign is opposite to its control sign
                let error = if axis.is_yaw() { -average } else { average };
                let gain = self.evaluate(axis, error, gain, limits);
                TickOutcome::Evaluated { error, gain }
            }
            None if self.window.ticks() > 0 => TickOutcome::Accumulating,
            None => TickOutcome::Settling,
        }
    }

    fn evaluate(
        &mut self,
        axis: Axis,
        error: i32,
        gain: &mut u8,
        limits: &TuningLimits,
    ) -> Option<u8> {
        let previous_error = self.previous_error;
        self.previous_error = error;
        log::trace!("gtune: {:?} window error {} (was {})", axis, error, previous_error);

        if !limits.is_enabled(axis) || error == 0 || previous_error == 0 || error == previous_error
        {
            return None;
        }

        let adjuster = GainAdjuster::new(axis, limits.strength());
        let p64 = adjuster.apply(self.p64, error, previous_error, limits.p64_bounds(axis));
        if p64 != self.p64 {
            log::debug!("gtune: {:?} P64 {} -> {}", axis, self.p64, p64);
        }
        self.p64 = p64;
        *gain = (p64 >> P_FRACTION_BITS) as u8;
        Some(*gain)
    }

    fn reset(&mut self) {
        self.previous_error = 0;
        self.window.settle();
    }

    pub fn ticks_since_reset(&self) -> i8 {
        self.window.ticks()
    }

    pub fn previous_error(&self) -> i32 {
        self.previous_error
    }

    pub fn gain_fixed_point(&self) -> i32 {
        self.p64
    }

    pub fn accumulator(&self) -> i32 {
        self.window.sum()
    }
}

pub struct GtuneSession {
    axes: [AxisTuningState; 3],
    limits: TuningLimits,
    disabled: [Option<DisableReason>; 3],
}

impl GtuneSession {
    pub fn start(
        profile: &mut PidProfile,
        limits: &TuningLimits,
        motor_count: u8,
    ) -> GtuneSession {
        let mut session = GtuneSession {
            axes: Axis::ALL.map(AxisTuningState::new),
            limits: *limits,
            disabled: [None; 3],
        };
        session.initialize(profile, motor_count);
        log::info!(
            "gtune: started, P {:?}, limits {:?}",
            profile.p8,
            session.limits
        );
        session
    }

    pub fn initialize(&mut self, profile: &mut PidProfile, motor_count: u8) {
        for axis in Axis::ALL {
            let i = axis.index();
            let reason =
                self.axes[i].initialize(axis, profile.p_mut(axis), &mut self.limits, motor_count);
            if reason.is_some() {
                self.disabled[i] = reason;
            }
        }
    }

    pub fn update(
        &mut self,
        axis: Axis,
        input: &TickInput,
        profile: &mut PidProfile,
    ) -> TickOutcome {
        self.axes[axis.index()].update(axis, input, profile.p_mut(axis), &self.limits)
    }

    // roll, pitch, yaw in that order
    pub fn update_all(
        &mut self,
        inputs: &[TickInput; 3],
        profile: &mut PidProfile,
    ) -> [TickOutcome; 3] {
        Axis::ALL.map(|axis| self.update(axis, &inputs[axis.index()], profile))
    }

    pub fn axis(&self, axis: Axis) -> &AxisTuningState {
        &self.axes[axis.index()]
    }

    // validated copy, disabled axes have a high limit of 0
    pub fn limits(&self) -> &TuningLimits {
        &self.limits
    }

    pub fn disabled_reason(&self, axis: Axis) -> Option<DisableReason> {
        self.disabled[axis.index()]
    }
}
