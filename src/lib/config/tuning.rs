use fugit::MicrosDurationU32;

// Window accumulator
pub const WINDOW_TICKS: i8 = 16;
// (125 + 16) ticks at 3 ms is roughly 420 ms of settle time after the stick is centered
pub const SETTLE_TICKS: i8 = -125;

// Gyro jitter dead zone, samples are chopped to a multiple of these
pub const YAW_QUANTUM: i16 = 32;
pub const ROLL_PITCH_QUANTUM: i16 = 128;

// Minimum change of |error| between two windows before the gain is touched
pub const YAW_THRESHOLD: i32 = 20;
pub const ROLL_PITCH_THRESHOLD: i32 = 10;

// Gain steps in 1/64 units of visible P
pub const P_FRACTION_BITS: u32 = 6;
pub const P_STEP: i32 = 1 << P_FRACTION_BITS;
pub const ANTI_WOBBLE_STEP: i32 = 32;

pub const MIN_MOTORS_FOR_YAW: u8 = 4;

pub const DEFAULT_LOW_LIMIT_P: u8 = 20;
pub const DEFAULT_HIGH_LIMIT_P: u8 = 70;
pub const DEFAULT_STRENGTH: u8 = 0;

// Accepted operator input ranges. A high limit of 0 disables tuning on that axis.
pub const LOW_LIMIT_MIN: u8 = 10;
pub const LOW_LIMIT_MAX: u8 = 200;
pub const HIGH_LIMIT_MAX: u8 = 200;
pub const STRENGTH_MAX: u8 = 10;

// 3 ms loop, one window is ~48 ms
pub const NOMINAL_CYCLE_TIME: MicrosDurationU32 = MicrosDurationU32::from_ticks(3_000);
