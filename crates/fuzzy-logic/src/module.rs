//! The fuzzy module: variables, rules and the query pipeline.
//!
//! A [`FuzzyModule`] is configured once by its owner (variables, sets, rules)
//! and then queried every tick:
//!
//! 1. [`FuzzyModule::fuzzify`] each input variable with a crisp reading
//! 2. [`FuzzyModule::defuzzify`] the output variable, which clears every
//!    consequent set, fires all rules and reduces the output to one value
//!
//! The module holds per-query DOM state, so every agent owns its own instance.

use std::collections::HashMap;

use crate::{
    Consequent, DefuzzifyMethod, FuzzyError, FuzzyRule, FzAnd, LinguisticVariable,
    MembershipShape, Result, SetId,
};

/// Index of a linguistic variable inside a [`FuzzyModule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct FuzzyModule {
    variables: Vec<LinguisticVariable>,
    by_name: HashMap<String, VariableId>,
    rules: Vec<FuzzyRule>,
}

impl FuzzyModule {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== configuration =====

    /// Creates a new, empty linguistic variable.
    pub fn create_variable(&mut self, name: impl Into<String>) -> Result<VariableId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(FuzzyError::DuplicateVariable(name));
        }

        let id = VariableId(self.variables.len());
        tracing::trace!(variable = %name, index = id.0, "created linguistic variable");
        self.variables.push(LinguisticVariable::new(name.clone()));
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Adds a set with an arbitrary shape to `variable`.
    pub fn add_set(
        &mut self,
        variable: VariableId,
        name: impl Into<String>,
        shape: MembershipShape,
    ) -> Result<SetId> {
        let var = self
            .variables
            .get_mut(variable.0)
            .ok_or(FuzzyError::UnknownVariableId(variable.0))?;
        let set = var.add_set(name, shape)?;
        Ok(SetId::new(variable.0, set))
    }

    pub fn add_left_shoulder_set(
        &mut self,
        variable: VariableId,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<SetId> {
        let shape = MembershipShape::left_shoulder(left, peak, right)?;
        self.add_set(variable, name, shape)
    }

    pub fn add_right_shoulder_set(
        &mut self,
        variable: VariableId,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<SetId> {
        let shape = MembershipShape::right_shoulder(left, peak, right)?;
        self.add_set(variable, name, shape)
    }

    pub fn add_triangular_set(
        &mut self,
        variable: VariableId,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<SetId> {
        let shape = MembershipShape::triangular(left, peak, right)?;
        self.add_set(variable, name, shape)
    }

    pub fn add_singleton_set(
        &mut self,
        variable: VariableId,
        name: impl Into<String>,
        left: f64,
        peak: f64,
        right: f64,
    ) -> Result<SetId> {
        let shape = MembershipShape::singleton(left, peak, right)?;
        self.add_set(variable, name, shape)
    }

    /// Appends `IF antecedent THEN consequent`.
    ///
    /// Every referenced set must already exist in this module; otherwise the
    /// rule is rejected and the rule base is left untouched.
    pub fn add_rule(&mut self, antecedent: FzAnd, consequent: impl Into<Consequent>) -> Result<()> {
        let consequent = consequent.into();
        if consequent.sets().is_empty() {
            return Err(FuzzyError::EmptyConsequent);
        }

        let rule = FuzzyRule::new(antecedent, consequent);
        if let Some(missing) = rule
            .references()
            .find(|id| id.dom(&self.variables).is_none())
        {
            return Err(FuzzyError::UnknownSet {
                variable: missing.variable,
                set: missing.set,
            });
        }

        tracing::trace!(
            index = self.rules.len(),
            terms = rule.antecedent().terms().len(),
            consequents = rule.consequent().sets().len(),
            "registered fuzzy rule"
        );
        self.rules.push(rule);
        Ok(())
    }

    // ===== queries =====

    /// Fuzzifies the named variable with a crisp value.
    pub fn fuzzify(&mut self, name: &str, value: f64) -> Result<()> {
        let id = self.require(name)?;
        self.fuzzify_variable(id, value)
    }

    /// Fuzzifies a variable by id.
    pub fn fuzzify_variable(&mut self, id: VariableId, value: f64) -> Result<()> {
        let var = self
            .variables
            .get_mut(id.0)
            .ok_or_else(|| FuzzyError::UnknownVariable(format!("#{}", id.0)))?;
        var.fuzzify(value);
        Ok(())
    }

    /// Fires every rule and defuzzifies the named output variable.
    ///
    /// Consequent sets are cleared first, so the result depends only on the
    /// inputs fuzzified since, never on earlier queries.
    pub fn defuzzify(&mut self, name: &str, method: DefuzzifyMethod) -> Result<f64> {
        let id = self.require(name)?;
        self.defuzzify_variable(id, method)
    }

    pub fn defuzzify_variable(&mut self, id: VariableId, method: DefuzzifyMethod) -> Result<f64> {
        if id.0 >= self.variables.len() {
            return Err(FuzzyError::UnknownVariable(format!("#{}", id.0)));
        }

        self.clear_consequents();
        for rule in &self.rules {
            let strength = rule.fire(&mut self.variables);
            if strength > 0.0 {
                tracing::trace!(strength, consequent = ?rule.consequent().sets(), "rule fired");
            }
        }

        let var = &self.variables[id.0];
        let value = method.apply(var)?;
        tracing::debug!(variable = var.name(), ?method, value, "defuzzified");
        Ok(value)
    }

    // ===== accessors =====

    /// Current DOM of a set, `None` if the id does not resolve.
    pub fn dom(&self, id: SetId) -> Option<f64> {
        id.dom(&self.variables)
    }

    pub fn variable(&self, id: VariableId) -> Option<&LinguisticVariable> {
        self.variables.get(id.0)
    }

    pub fn variable_id(&self, name: &str) -> Option<VariableId> {
        self.by_name.get(name).copied()
    }

    /// Resolves `variable` / `set` names to a [`SetId`].
    pub fn set_id(&self, variable: &str, set: &str) -> Option<SetId> {
        let id = self.variable_id(variable)?;
        let index = self.variables[id.0].set_index(set)?;
        Some(SetId::new(id.0, index))
    }

    pub fn variables(&self) -> &[LinguisticVariable] {
        &self.variables
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    fn require(&self, name: &str) -> Result<VariableId> {
        self.variable_id(name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_owned()))
    }

    fn clear_consequents(&mut self) {
        for rule in &self.rules {
            for target in rule.consequent().sets() {
                if let Some(set) = self
                    .variables
                    .get_mut(target.variable)
                    .and_then(|var| var.set_mut(target.set))
                {
                    set.clear();
                }
            }
        }
    }
}
