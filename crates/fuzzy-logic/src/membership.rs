//! Membership function shapes.
//!
//! Every shape is described by three breakpoints `(left, peak, right)` and is
//! evaluated through a single [`MembershipShape::membership`] dispatch. Ramps
//! with zero width behave as instantaneous steps, so no shape ever divides by
//! zero.

use crate::{FuzzyError, Result};

/// The shape of a fuzzy set's membership function.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MembershipShape {
    /// Fully in the set up to `peak` (including everything below `left`),
    /// ramping down to 0 at `right`.
    LeftShoulder { left: f64, peak: f64, right: f64 },

    /// Out of the set up to `left`, ramping up to 1 at `peak` and saturating
    /// beyond.
    RightShoulder { left: f64, peak: f64, right: f64 },

    /// Ramps up from 0 at `left` to 1 at `peak`, then back down to 0 at `right`.
    Triangular { left: f64, peak: f64, right: f64 },

    /// Crisp interval: 1 on `[left, right]`, 0 elsewhere.
    Singleton { left: f64, peak: f64, right: f64 },
}

impl MembershipShape {
    /// Creates a left shoulder shape.
    pub fn left_shoulder(left: f64, peak: f64, right: f64) -> Result<Self> {
        validate(left, peak, right)?;
        Ok(Self::LeftShoulder { left, peak, right })
    }

    /// Creates a right shoulder shape.
    pub fn right_shoulder(left: f64, peak: f64, right: f64) -> Result<Self> {
        validate(left, peak, right)?;
        Ok(Self::RightShoulder { left, peak, right })
    }

    /// Creates a triangular shape.
    pub fn triangular(left: f64, peak: f64, right: f64) -> Result<Self> {
        validate(left, peak, right)?;
        Ok(Self::Triangular { left, peak, right })
    }

    /// Creates a singleton shape.
    pub fn singleton(left: f64, peak: f64, right: f64) -> Result<Self> {
        validate(left, peak, right)?;
        Ok(Self::Singleton { left, peak, right })
    }

    /// Returns `(left, peak, right)`.
    #[inline]
    pub const fn breakpoints(&self) -> (f64, f64, f64) {
        match *self {
            Self::LeftShoulder { left, peak, right }
            | Self::RightShoulder { left, peak, right }
            | Self::Triangular { left, peak, right }
            | Self::Singleton { left, peak, right } => (left, peak, right),
        }
    }

    /// Degree of membership of `x`, always in `[0, 1]`.
    ///
    /// NaN is outside every set and yields 0.
    pub fn membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let dom = match *self {
            Self::LeftShoulder { peak, right, .. } => {
                if x <= peak {
                    1.0
                } else if x >= right {
                    0.0
                } else {
                    // peak < x < right, so the ramp has non-zero width
                    (right - x) / (right - peak)
                }
            }
            Self::RightShoulder { left, peak, .. } => {
                if x >= peak {
                    1.0
                } else if x <= left {
                    0.0
                } else {
                    (x - left) / (peak - left)
                }
            }
            Self::Triangular { left, peak, right } => {
                if x < left || x > right {
                    0.0
                } else if x == peak {
                    1.0
                } else if x < peak {
                    (x - left) / (peak - left)
                } else {
                    (right - x) / (right - peak)
                }
            }
            Self::Singleton { left, right, .. } => {
                if (left..=right).contains(&x) {
                    1.0
                } else {
                    0.0
                }
            }
        };

        dom.clamp(0.0, 1.0)
    }

    /// Representative crisp value used by max-of-average defuzzification.
    ///
    /// Shoulders use the midpoint of their plateau, triangles and singletons
    /// their peak.
    pub fn representative_value(&self) -> f64 {
        match *self {
            Self::LeftShoulder { left, peak, .. } => (left + peak) / 2.0,
            Self::RightShoulder { peak, right, .. } => (peak + right) / 2.0,
            Self::Triangular { peak, .. } | Self::Singleton { peak, .. } => peak,
        }
    }
}

fn validate(left: f64, peak: f64, right: f64) -> Result<()> {
    let finite = left.is_finite() && peak.is_finite() && right.is_finite();
    if finite && left <= peak && peak <= right {
        Ok(())
    } else {
        Err(FuzzyError::InvalidBreakpoints { left, peak, right })
    }
}
