//! Defuzzification strategies.
//!
//! Turns the aggregated DOMs of an output variable back into one crisp value.
//! New strategies are added as enum variants so the
//! [`FuzzyModule::defuzzify`](crate::FuzzyModule::defuzzify) signature never
//! changes.

use crate::{FuzzyError, LinguisticVariable, Result};

/// Defuzzification strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DefuzzifyMethod {
    /// Max-of-average: the representative value of the single most activated
    /// set (first registered on ties). O(sets).
    #[default]
    MaxAv,

    /// Sampled centroid of the clipped output area over the variable's range.
    Centroid { samples: u32 },
}

impl DefuzzifyMethod {
    pub const DEFAULT_CENTROID_SAMPLES: u32 = 15;

    /// Centroid with [`Self::DEFAULT_CENTROID_SAMPLES`] sample points.
    pub const fn centroid() -> Self {
        Self::Centroid {
            samples: Self::DEFAULT_CENTROID_SAMPLES,
        }
    }

    /// Computes the crisp output for `variable`.
    ///
    /// Returns 0 when no set in the variable is activated.
    pub fn apply(self, variable: &LinguisticVariable) -> Result<f64> {
        match self {
            Self::MaxAv => Ok(max_av(variable)),
            Self::Centroid { samples } => centroid(variable, samples),
        }
    }
}

fn max_av(variable: &LinguisticVariable) -> f64 {
    variable
        .most_activated()
        .map_or(0.0, |set| set.representative_value())
}

fn centroid(variable: &LinguisticVariable, samples: u32) -> Result<f64> {
    if samples == 0 {
        return Err(FuzzyError::InvalidSampleCount);
    }
    let Some((min, max)) = variable.range() else {
        return Ok(0.0);
    };

    let step = if samples > 1 {
        (max - min) / f64::from(samples - 1)
    } else {
        0.0
    };
    let origin = if samples > 1 { min } else { (min + max) / 2.0 };

    let mut moment = 0.0;
    let mut area = 0.0;
    for i in 0..samples {
        let point = origin + step * f64::from(i);
        let contribution: f64 = variable
            .sets()
            .iter()
            .map(|set| set.shape().membership(point).min(set.dom()))
            .sum();
        moment += point * contribution;
        area += contribution;
    }

    if area <= 0.0 {
        Ok(0.0)
    } else {
        Ok(moment / area)
    }
}
