use pid::Pid;

use crate::controller::axis::Axis;

// profile units to rate controller units
pub const RATE_P_SCALE: f32 = 1.0 / 10.0;
pub const RATE_I_SCALE: f32 = 1.0 / 1000.0;
pub const RATE_D_SCALE: f32 = 1.0 / 100.0;

#[derive(Clone, Copy)]
pub struct TuningParams {
    pub p_lim: f32,
    pub i_lim: f32,
    pub d_lim: f32,
    pub out_lim: f32,
}
pub const RATE_OUT_LIM: f32 = 500.0;
pub const RATE_P_LIM: f32 = RATE_OUT_LIM;
pub const RATE_I_LIM: f32 = RATE_OUT_LIM / 2.0;
pub const RATE_D_LIM: f32 = RATE_OUT_LIM;

impl Default for TuningParams {
    fn default() -> TuningParams {
        TuningParams {
            p_lim: RATE_P_LIM,
            i_lim: RATE_I_LIM,
            d_lim: RATE_D_LIM,
            out_lim: RATE_OUT_LIM,
        }
    }
}

/// Per-axis PID gains as the rate loop reads them. G-Tune owns `p8` while a
/// session is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PidProfile {
    pub p8: [u8; 3],
    pub i8: [u8; 3],
    pub d8: [u8; 3],
}
impl PidProfile {
    pub fn p(&self, axis: Axis) -> u8 {
        self.p8[axis.index()]
    }

    pub fn p_mut(&mut self, axis: Axis) -> &mut u8 {
        &mut self.p8[axis.index()]
    }

    pub fn rate_pid(&self, axis: Axis, params: &TuningParams) -> Pid<f32> {
        let i = axis.index();
        Pid::new(
            self.p8[i] as f32 * RATE_P_SCALE,
            self.i8[i] as f32 * RATE_I_SCALE,
            self.d8[i] as f32 * RATE_D_SCALE,
            params.p_lim,
            params.i_lim,
            params.d_lim,
            params.out_lim,
            0.0,
        )
    }

    // only kp, the integral term keeps running
    pub fn sync_pid(&self, axis: Axis, pid: &mut Pid<f32>) {
        pid.kp = self.p(axis) as f32 * RATE_P_SCALE;
    }
}
impl Default for PidProfile {
    fn default() -> PidProfile {
        PidProfile {
            p8: [40, 40, 85],
            i8: [30, 30, 45],
            d8: [23, 23, 0],
        }
    }
}
