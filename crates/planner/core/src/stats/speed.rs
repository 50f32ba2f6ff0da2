//! Carried weight to movement speed.
//!
//! Speed falls in 5 % steps once total weight crosses each breakpoint.

use super::weight::round2;

/// Unencumbered sprint speed in m/s.
pub const BASE_SPEED: f64 = 8.06;

/// A weight threshold and the speed percentage that applies at or above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBreakpoint {
    pub kg: f64,
    pub pct: u32,
}

const fn bp(kg: f64, pct: u32) -> SpeedBreakpoint {
    SpeedBreakpoint { kg, pct }
}

/// Ascending by weight.
pub const SPEED_BREAKPOINTS: [SpeedBreakpoint; 11] = [
    bp(0.0, 100),
    bp(15.0, 95),
    bp(25.0, 90),
    bp(35.0, 85),
    bp(45.0, 80),
    bp(55.0, 75),
    bp(60.0, 70),
    bp(65.0, 65),
    bp(70.0, 60),
    bp(75.0, 55),
    bp(80.0, 50),
];

/// Percentage of the highest breakpoint not above `total_kg`; 100 below all of them.
pub fn speed_pct(total_kg: f64) -> u32 {
    SPEED_BREAKPOINTS
        .iter()
        .rev()
        .find(|b| total_kg >= b.kg)
        .map_or(100, |b| b.pct)
}

/// [`BASE_SPEED`] scaled by `pct`, rounded to centimetres per second.
pub fn effective_speed(pct: u32) -> f64 {
    round2(BASE_SPEED * f64::from(pct) / 100.0)
}
