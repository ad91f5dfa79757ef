//! Linguistic variables.
//!
//! A linguistic variable is an ordered family of overlapping fuzzy sets over a
//! single input domain, e.g. `DistanceToTarget` with `Target_Close`,
//! `Target_Medium` and `Target_Far`.

use crate::{FuzzyError, FuzzySet, MembershipShape, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    sets: Vec<FuzzySet>,
    /// Smallest and largest breakpoint over all member sets.
    range: Option<(f64, f64)>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
            range: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a new set and returns its index within this variable.
    ///
    /// Sets keep their creation order, which is also the tie-break order used
    /// during defuzzification.
    pub fn add_set(&mut self, name: impl Into<String>, shape: MembershipShape) -> Result<usize> {
        let name = name.into();
        if self.set_index(&name).is_some() {
            return Err(FuzzyError::DuplicateSet {
                variable: self.name.clone(),
                set: name,
            });
        }

        let (left, _, right) = shape.breakpoints();
        self.range = Some(match self.range {
            Some((min, max)) => (min.min(left), max.max(right)),
            None => (left, right),
        });

        self.sets.push(FuzzySet::new(name, shape));
        Ok(self.sets.len() - 1)
    }

    /// Recomputes the DOM of every set from the same crisp value.
    pub fn fuzzify(&mut self, x: f64) {
        for set in &mut self.sets {
            set.fuzzify(x);
        }
    }

    #[inline]
    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    #[inline]
    pub fn set(&self, index: usize) -> Option<&FuzzySet> {
        self.sets.get(index)
    }

    #[inline]
    pub(crate) fn set_mut(&mut self, index: usize) -> Option<&mut FuzzySet> {
        self.sets.get_mut(index)
    }

    pub fn set_index(&self, name: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.name() == name)
    }

    /// `(min, max)` over the breakpoints of all sets, `None` while empty.
    #[inline]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// The set with the highest non-zero DOM; the earliest registered set wins
    /// ties.
    pub fn most_activated(&self) -> Option<&FuzzySet> {
        self.sets.iter().fold(None, |best: Option<&FuzzySet>, set| {
            if set.dom() <= 0.0 {
                return best;
            }
            match best {
                Some(current) if current.dom() >= set.dom() => Some(current),
                _ => Some(set),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance() -> LinguisticVariable {
        let mut var = LinguisticVariable::new("DistanceToTarget");
        var.add_set(
            "Target_Close",
            MembershipShape::left_shoulder(0.0, 25.0, 150.0).unwrap(),
        )
        .unwrap();
        var.add_set(
            "Target_Medium",
            MembershipShape::triangular(25.0, 150.0, 300.0).unwrap(),
        )
        .unwrap();
        var.add_set(
            "Target_Far",
            MembershipShape::right_shoulder(150.0, 300.0, 1000.0).unwrap(),
        )
        .unwrap();
        var
    }

    fn doms(var: &LinguisticVariable) -> Vec<f64> {
        var.sets().iter().map(FuzzySet::dom).collect()
    }

    #[test]
    fn sets_keep_creation_order() {
        let var = distance();
        assert_eq!(var.set_index("Target_Close"), Some(0));
        assert_eq!(var.set_index("Target_Far"), Some(2));
        assert_eq!(var.range(), Some((0.0, 1000.0)));
    }

    #[test]
    fn duplicate_set_name_is_rejected() {
        let mut var = distance();
        let err = var
            .add_set("Target_Far", MembershipShape::singleton(0.0, 0.0, 0.0).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::DuplicateSet {
                variable: "DistanceToTarget".into(),
                set: "Target_Far".into(),
            }
        );
        assert_eq!(var.sets().len(), 3);
    }

    #[test]
    fn fuzzify_updates_every_set() {
        let mut var = distance();
        var.fuzzify(87.5);
        assert_eq!(doms(&var), vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn fuzzify_is_idempotent() {
        let mut var = distance();
        var.fuzzify(200.0);
        let first = doms(&var);
        var.fuzzify(200.0);
        assert_eq!(doms(&var), first);
    }

    #[test]
    fn out_of_domain_input_leaves_every_set_empty() {
        let mut var = LinguisticVariable::new("Ammo");
        var.add_set("Okay", MembershipShape::triangular(0.0, 30.0, 60.0).unwrap())
            .unwrap();
        var.fuzzify(500.0);
        assert_eq!(doms(&var), vec![0.0]);
        assert!(var.most_activated().is_none());
    }

    #[test]
    fn most_activated_prefers_first_on_ties() {
        let mut var = distance();
        var.fuzzify(87.5);
        assert_eq!(var.most_activated().map(FuzzySet::name), Some("Target_Close"));

        var.fuzzify(280.0);
        assert_eq!(var.most_activated().map(FuzzySet::name), Some("Target_Far"));
    }
}
