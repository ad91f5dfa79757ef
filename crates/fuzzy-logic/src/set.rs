//! Fuzzy sets.

use crate::MembershipShape;

/// A named membership shape together with its last computed degree of
/// membership (DOM).
///
/// The DOM is transient: fuzzification overwrites it and rule firing can only
/// raise it. It starts at 0.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    name: String,
    shape: MembershipShape,
    dom: f64,
}

impl FuzzySet {
    /// Creates a set with a DOM of 0.
    pub fn new(name: impl Into<String>, shape: MembershipShape) -> Self {
        Self {
            name: name.into(),
            shape,
            dom: 0.0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn shape(&self) -> &MembershipShape {
        &self.shape
    }

    /// Degree of membership computed by the last fuzzification or rule firing.
    #[inline]
    pub fn dom(&self) -> f64 {
        self.dom
    }

    /// Overwrites the DOM with the membership of `x`.
    #[inline]
    pub fn fuzzify(&mut self, x: f64) {
        self.dom = self.shape.membership(x);
    }

    /// Fuzzy OR of the current DOM with `strength` (keeps the maximum).
    #[inline]
    pub fn or_with(&mut self, strength: f64) {
        let strength = if strength.is_nan() { 0.0 } else { strength };
        self.dom = self.dom.max(strength.clamp(0.0, 1.0));
    }

    /// Resets the DOM to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.dom = 0.0;
    }

    #[inline]
    pub fn representative_value(&self) -> f64 {
        self.shape.representative_value()
    }
}
