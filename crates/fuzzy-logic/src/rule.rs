//! Fuzzy rules.
//!
//! Rules reference sets by index ([`SetId`]) instead of by pointer so they can
//! live in a separate container from the variables they read and write.
//!
//! # Semantics
//!
//! - Antecedent strength is the **minimum** DOM over its terms (fuzzy AND)
//! - Each consequent set keeps the **maximum** of its DOM and that strength
//!
//! Because aggregation is a maximum, firing order never changes the result.

use crate::{FuzzyError, LinguisticVariable, Result};

/// Index-based reference to a fuzzy set inside a [`FuzzyModule`](crate::FuzzyModule).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId {
    /// Index of the owning variable within the module.
    pub variable: usize,
    /// Index of the set within its variable.
    pub set: usize,
}

impl SetId {
    #[inline]
    pub const fn new(variable: usize, set: usize) -> Self {
        Self { variable, set }
    }

    pub(crate) fn dom(self, variables: &[LinguisticVariable]) -> Option<f64> {
        variables
            .get(self.variable)
            .and_then(|var| var.set(self.set))
            .map(|set| set.dom())
    }
}

/// Conjunction of fuzzy set terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FzAnd {
    terms: Vec<SetId>,
}

impl FzAnd {
    /// Creates a conjunction.
    ///
    /// Fails with [`FuzzyError::EmptyAntecedent`] when `terms` is empty.
    pub fn new(terms: impl IntoIterator<Item = SetId>) -> Result<Self> {
        let terms: Vec<SetId> = terms.into_iter().collect();
        if terms.is_empty() {
            return Err(FuzzyError::EmptyAntecedent);
        }
        Ok(Self { terms })
    }

    #[inline]
    pub fn terms(&self) -> &[SetId] {
        &self.terms
    }

    /// Minimum DOM across the terms. Unresolvable terms count as 0.
    pub fn strength(&self, variables: &[LinguisticVariable]) -> f64 {
        self.terms
            .iter()
            .map(|term| term.dom(variables).unwrap_or(0.0))
            .fold(1.0, f64::min)
    }
}

/// One or more sets driven by a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consequent(Vec<SetId>);

impl Consequent {
    #[inline]
    pub fn sets(&self) -> &[SetId] {
        &self.0
    }
}

impl From<SetId> for Consequent {
    fn from(set: SetId) -> Self {
        Self(vec![set])
    }
}

impl From<Vec<SetId>> for Consequent {
    fn from(sets: Vec<SetId>) -> Self {
        Self(sets)
    }
}

impl<const N: usize> From<[SetId; N]> for Consequent {
    fn from(sets: [SetId; N]) -> Self {
        Self(sets.to_vec())
    }
}

/// `IF antecedent THEN consequent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzyRule {
    antecedent: FzAnd,
    consequent: Consequent,
}

impl FuzzyRule {
    pub(crate) fn new(antecedent: FzAnd, consequent: Consequent) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }

    #[inline]
    pub fn antecedent(&self) -> &FzAnd {
        &self.antecedent
    }

    #[inline]
    pub fn consequent(&self) -> &Consequent {
        &self.consequent
    }

    /// Every set the rule touches, antecedent first.
    pub fn references(&self) -> impl Iterator<Item = SetId> + '_ {
        self.antecedent
            .terms()
            .iter()
            .chain(self.consequent.sets())
            .copied()
    }

    /// Fires the rule: computes the antecedent strength and ORs it into each
    /// consequent set. Returns the strength.
    pub(crate) fn fire(&self, variables: &mut [LinguisticVariable]) -> f64 {
        let strength = self.antecedent.strength(variables);
        for target in self.consequent.sets() {
            if let Some(set) = variables
                .get_mut(target.variable)
                .and_then(|var| var.set_mut(target.set))
            {
                set.or_with(strength);
            }
        }
        strength
    }
}
