//! Six-channel damage multipliers.
//!
//! A multiplier of 1.0 means no mitigation. Pieces stack multiplicatively, so
//! the aggregate is independent of equip order.

/// Damage channel an armor piece can mitigate.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResistanceChannel {
    Physical,
    Energy,
    Distortion,
    Thermal,
    Biochemical,
    Stun,
}

impl ResistanceChannel {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Energy => "Energy",
            Self::Distortion => "Distortion",
            Self::Thermal => "Thermal",
            Self::Biochemical => "Biochemical",
            Self::Stun => "Stun",
        }
    }
}

/// Per-channel incoming-damage multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resistance {
    pub physical: f64,
    pub energy: f64,
    pub distortion: f64,
    pub thermal: f64,
    pub biochemical: f64,
    pub stun: f64,
}

impl Default for Resistance {
    fn default() -> Self {
        Self::NONE
    }
}

impl Resistance {
    /// Identity multiplier: no mitigation on any channel.
    pub const NONE: Self = Self {
        physical: 1.0,
        energy: 1.0,
        distortion: 1.0,
        thermal: 1.0,
        biochemical: 1.0,
        stun: 1.0,
    };

    pub fn get(&self, channel: ResistanceChannel) -> f64 {
        match channel {
            ResistanceChannel::Physical => self.physical,
            ResistanceChannel::Energy => self.energy,
            ResistanceChannel::Distortion => self.distortion,
            ResistanceChannel::Thermal => self.thermal,
            ResistanceChannel::Biochemical => self.biochemical,
            ResistanceChannel::Stun => self.stun,
        }
    }

    pub fn with(mut self, channel: ResistanceChannel, value: f64) -> Self {
        let slot = match channel {
            ResistanceChannel::Physical => &mut self.physical,
            ResistanceChannel::Energy => &mut self.energy,
            ResistanceChannel::Distortion => &mut self.distortion,
            ResistanceChannel::Thermal => &mut self.thermal,
            ResistanceChannel::Biochemical => &mut self.biochemical,
            ResistanceChannel::Stun => &mut self.stun,
        };
        *slot = value;
        self
    }

    /// Channel-wise product.
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            physical: self.physical * other.physical,
            energy: self.energy * other.energy,
            distortion: self.distortion * other.distortion,
            thermal: self.thermal * other.thermal,
            biochemical: self.biochemical * other.biochemical,
            stun: self.stun * other.stun,
        }
    }

    /// Whole-percent damage blocked on a channel: `round((1 - m) * 100)`.
    pub fn protection_pct(&self, channel: ResistanceChannel) -> i32 {
        ((1.0 - self.get(channel)) * 100.0).round() as i32
    }
}

impl<'a> std::iter::Product<&'a Resistance> for Resistance {
    fn product<I: Iterator<Item = &'a Resistance>>(iter: I) -> Self {
        iter.fold(Self::NONE, |acc, r| acc.multiply(r))
    }
}
