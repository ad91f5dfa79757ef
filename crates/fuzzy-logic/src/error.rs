//! Errors raised while configuring or querying a [`FuzzyModule`](crate::FuzzyModule).
//!
//! Configuration mistakes (duplicate names, dangling set references, malformed
//! shapes) are reported at registration time so a malformed rule base never
//! reaches the per-tick query path. Degenerate query inputs are not errors:
//! a value outside every set yields DOM 0 and an unfired output yields 0.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FuzzyError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FuzzyError {
    /// A variable with this name already exists in the module.
    #[error("linguistic variable '{0}' already exists")]
    DuplicateVariable(String),

    /// A set with this name already exists in the variable.
    #[error("fuzzy set '{set}' already exists in variable '{variable}'")]
    DuplicateSet { variable: String, set: String },

    /// No variable is registered under this name.
    #[error("unknown linguistic variable '{0}'")]
    UnknownVariable(String),

    /// A set was added to a variable id that does not belong to this module.
    #[error("variable id #{0} does not exist in this module")]
    UnknownVariableId(usize),

    /// A set reference does not resolve inside this module.
    #[error("set reference {variable}:{set} does not exist in this module")]
    UnknownSet { variable: usize, set: usize },

    /// Breakpoints must be finite and non-decreasing.
    #[error("invalid breakpoints ({left}, {peak}, {right}): expected finite left <= peak <= right")]
    InvalidBreakpoints { left: f64, peak: f64, right: f64 },

    /// An AND antecedent needs at least one term.
    #[error("rule antecedent must reference at least one fuzzy set")]
    EmptyAntecedent,

    /// A rule needs at least one consequent set.
    #[error("rule consequent must reference at least one fuzzy set")]
    EmptyConsequent,

    /// Centroid defuzzification needs at least one sample point.
    #[error("centroid defuzzification requires at least one sample")]
    InvalidSampleCount,
}

impl FuzzyError {
    /// Returns true if this error comes from building the rule base rather
    /// than from a query.
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnknownVariable(_) | Self::InvalidSampleCount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_errors_are_configuration_errors() {
        let configuration = [
            FuzzyError::DuplicateVariable("v".into()),
            FuzzyError::DuplicateSet {
                variable: "v".into(),
                set: "s".into(),
            },
            FuzzyError::UnknownVariableId(3),
            FuzzyError::UnknownSet { variable: 0, set: 1 },
            FuzzyError::InvalidBreakpoints {
                left: 2.0,
                peak: 1.0,
                right: 0.0,
            },
            FuzzyError::EmptyAntecedent,
            FuzzyError::EmptyConsequent,
        ];
        for err in configuration {
            assert!(err.is_configuration(), "{err:?}");
        }
    }

    #[test]
    fn query_errors_are_not_configuration_errors() {
        assert!(!FuzzyError::UnknownVariable("v".into()).is_configuration());
        assert!(!FuzzyError::InvalidSampleCount.is_configuration());
    }
}
