#![cfg_attr(not(test), no_std)]

pub mod config {
    pub mod limits;
    pub mod tuning;
}

pub mod controller {
    pub mod axis;
    pub mod gain_adjuster;
    pub mod gtune;
    pub mod pid_params;
}

pub mod filtering {
    pub mod pt1;
    pub mod window;
}

pub mod timing;

pub use config::limits::{ConfigError, TuningLimits};
pub use controller::axis::{Axis, FlightModeFlags, TickInput};
pub use controller::gtune::{AxisTuningState, DisableReason, GtuneSession, TickOutcome};
pub use controller::pid_params::{PidProfile, TuningParams};
