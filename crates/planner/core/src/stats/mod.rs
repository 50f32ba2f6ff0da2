//! Stat aggregation engine.
//!
//! ```text
//! SlotMap ─┬─ armor slots ──► ArmorTable ──► pieces ─► mitigation sums / products
//!          ├─ weapon slots ─► WeaponTable ─► mass, equipped weapons
//!          ├─ multitools ───► attachment weights
//!          └─ throwables ───► flat weight
//!                                   │
//!                   total weight ───┴─► speed breakpoints ─► effective speed
//! ```
//!
//! Everything here is a pure function of the slot map and the reference tables.

mod aggregate;
mod resistance;
mod speed;
mod weight;

pub use aggregate::{
    ArmorPiece, EquippedWeapon, LoadoutStats, WEAPON_STAT_SLOTS, WEAPON_WEIGHT_SLOTS, WeightEntry,
    aggregate, breakdown_label,
};
pub use resistance::{Resistance, ResistanceChannel};
pub use speed::{BASE_SPEED, SPEED_BREAKPOINTS, SpeedBreakpoint, effective_speed, speed_pct};
pub use weight::{BASE_CLOTHING_WEIGHT, MultitoolAttachment, THROWABLE_WEIGHT, round2};
