//! Weight tables for everything the player carries.

use crate::catalog::ArmorCategory;
use crate::schema::ArmorClass;

/// Hat, gloves, pants, footwear and mobiGlas worn under any loadout.
pub const BASE_CLOTHING_WEIGHT: f64 = 1.55;

/// Weight of anything equipped in a throwable slot.
pub const THROWABLE_WEIGHT: f64 = 0.4;

impl ArmorCategory {
    /// Carried weight of a piece in this category.
    ///
    /// Undersuits weigh nothing; a piece without a class weighs as light.
    pub fn weight(&self, class: Option<ArmorClass>) -> f64 {
        use ArmorClass::*;
        let class = class.unwrap_or(Light);
        match (self, class) {
            (Self::Helmet, _) => 5.05,
            (Self::Torso, Light) => 3.0,
            (Self::Torso, Medium) => 5.0,
            (Self::Torso, Heavy) => 7.0,
            (Self::Arm, Light) => 2.0,
            (Self::Arm, Medium) => 4.0,
            (Self::Arm, Heavy) => 5.0,
            (Self::Leg, Light) => 3.0,
            (Self::Leg, Medium) => 6.0,
            (Self::Leg, Heavy) => 8.0,
            (Self::Backpack, _) => 6.0,
            (Self::Undersuit, _) => 0.0,
        }
    }
}

/// Multi-tool head that can be fitted in a multitool slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MultitoolAttachment {
    Mining,
    Salvage,
    Cutter,
    #[strum(to_string = "Tractor Beam")]
    TractorBeam,
    Medical,
}

impl MultitoolAttachment {
    /// Parses a slot value; unknown names are not attachments.
    pub fn from_item(item: &str) -> Option<Self> {
        item.trim().parse().ok()
    }

    pub const fn weight(&self) -> f64 {
        match self {
            Self::TractorBeam => 4.0,
            Self::Mining | Self::Salvage | Self::Cutter | Self::Medical => 1.5,
        }
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
