//! Pitch descriptors: the record the pitch oracle produces per pitch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Pitch-type tag, the closed 10-entry vocabulary the models were trained
/// on. Codes follow the standard pitch classification abbreviations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchType {
    /// Changeup
    Changeup,
    /// Curveball
    Curveball,
    /// Cutter
    Cutter,
    /// Four-seam fastball
    FourSeam,
    /// Splitter
    Splitter,
    /// Two-seam fastball
    TwoSeam,
    /// Knuckle-curve
    KnuckleCurve,
    /// Knuckleball
    Knuckleball,
    /// Sinker
    Sinker,
    /// Slider
    Slider,
}

impl PitchType {
    /// Number of pitch types in the vocabulary.
    pub const COUNT: usize = 10;

    /// All pitch types in canonical (code-alphabetical) order.
    pub const ALL: [PitchType; PitchType::COUNT] = [
        PitchType::Changeup,
        PitchType::Curveball,
        PitchType::Cutter,
        PitchType::FourSeam,
        PitchType::Splitter,
        PitchType::TwoSeam,
        PitchType::KnuckleCurve,
        PitchType::Knuckleball,
        PitchType::Sinker,
        PitchType::Slider,
    ];

    /// Two-letter classification code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PitchType::Changeup => "CH",
            PitchType::Curveball => "CU",
            PitchType::Cutter => "FC",
            PitchType::FourSeam => "FF",
            PitchType::Splitter => "FS",
            PitchType::TwoSeam => "FT",
            PitchType::KnuckleCurve => "KC",
            PitchType::Knuckleball => "KN",
            PitchType::Sinker => "SI",
            PitchType::Slider => "SL",
        }
    }

    /// Parse a classification code.
    ///
    /// Returns `SimError::UnknownPitchType` for anything outside the
    /// vocabulary.
    pub fn from_code(code: &str) -> Result<Self, SimError> {
        PitchType::ALL
            .iter()
            .copied()
            .find(|pt| pt.code() == code)
            .ok_or_else(|| SimError::UnknownPitchType(code.to_string()))
    }

    /// Position of this type in `PitchType::ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PitchType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchType::from_code(s)
    }
}

/// A pitch descriptor: the fixed-shape record the pitch oracle emits and the
/// event oracle consumes.
///
/// Five numeric trajectory features plus the categorical type tag. Feature
/// scaling and normalization are the model's concern, not the simulator's;
/// values here are raw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Pitch classification.
    pub pitch_type: PitchType,

    /// Release speed in mph.
    pub start_speed: f32,

    /// Horizontal plate-crossing location in feet from the plate center.
    pub px: f32,

    /// Vertical plate-crossing location in feet above the ground.
    pub pz: f32,

    /// Spin rate in rpm.
    pub spin_rate: f32,

    /// Spin direction in degrees.
    pub spin_dir: f32,
}

impl Pitch {
    /// The numeric features in fixed order, excluding the type tag.
    #[must_use]
    pub fn features(&self) -> [f32; 5] {
        [
            self.start_speed,
            self.px,
            self.pz,
            self.spin_rate,
            self.spin_dir,
        ]
    }
}
