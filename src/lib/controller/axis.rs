use bitflags::bitflags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Roll = 0,
    Pitch = 1,
    Yaw = 2,
}
impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_yaw(self) -> bool {
        matches!(self, Axis::Yaw)
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FlightModeFlags: u8 {
        const ANGLE = 1 << 0;
        const HORIZON = 1 << 1;
    }
}
impl FlightModeFlags {
    // both self-level modes actively damp roll/pitch rate error
    pub fn holds_attitude(&self) -> bool {
        self.intersects(FlightModeFlags::ANGLE | FlightModeFlags::HORIZON)
    }
}

/// Everything the tuner needs from the control loop for one axis on one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    pub stick_command: i16,
    pub attitude_hold: bool,
    pub gyro_rate: i16,
}
impl TickInput {
    pub fn new(stick_command: i16, attitude_hold: bool, gyro_rate: i16) -> TickInput {
        TickInput {
            stick_command,
            attitude_hold,
            gyro_rate,
        }
    }

    pub fn from_modes(stick_command: i16, modes: &FlightModeFlags, gyro_rate: i16) -> TickInput {
        TickInput::new(stick_command, modes.holds_attitude(), gyro_rate)
    }

    // Pilot input on any axis, or self-level on roll/pitch, blocks tuning
    pub fn is_blocked(&self, axis: Axis) -> bool {
        self.stick_command != 0 || (!axis.is_yaw() && self.attitude_hold)
    }
}
