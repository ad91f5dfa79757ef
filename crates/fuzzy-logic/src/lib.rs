//! Lightweight fuzzy inference engine for game agent decision making.
//!
//! This library scores the desirability of an action from imprecise inputs
//! (distance to target, ammunition left, ...) once per simulation tick.
//!
//! - **Closed shape family**: left shoulder, right shoulder, triangle, singleton
//! - **AND-only antecedents**: rule strength is the minimum DOM of its terms
//! - **Max aggregation**: consequent sets keep the strongest supporting rule
//! - **Cheap defuzzification**: max-of-average picks one representative value
//!
//! # Architecture
//!
//! - [`MembershipShape`]: maps a crisp value to a degree of membership
//! - [`FuzzySet`]: a named shape plus its last computed DOM
//! - [`LinguisticVariable`]: ordered family of sets sharing one input domain
//! - [`FuzzyRule`]: an [`FzAnd`] antecedent driving one or more consequent sets
//! - [`FuzzyModule`]: owns variables and rules, runs fuzzify / defuzzify
//!
//! # Example
//!
//! ```rust
//! use fuzzy_logic::{DefuzzifyMethod, FuzzyModule, FzAnd};
//!
//! # fn main() -> fuzzy_logic::Result<()> {
//! let mut fm = FuzzyModule::new();
//!
//! let distance = fm.create_variable("DistanceToTarget")?;
//! let close = fm.add_left_shoulder_set(distance, "Target_Close", 0.0, 25.0, 150.0)?;
//! let far = fm.add_right_shoulder_set(distance, "Target_Far", 25.0, 150.0, 300.0)?;
//!
//! let ammo = fm.create_variable("AmmoStatus")?;
//! let loads = fm.add_right_shoulder_set(ammo, "Ammo_Loads", 10.0, 30.0, 100.0)?;
//!
//! let desirability = fm.create_variable("Desirability")?;
//! let high = fm.add_right_shoulder_set(desirability, "VeryDesirable", 50.0, 75.0, 100.0)?;
//! let low = fm.add_left_shoulder_set(desirability, "Undesirable", 0.0, 25.0, 50.0)?;
//!
//! fm.add_rule(FzAnd::new([close, loads])?, high)?;
//! fm.add_rule(FzAnd::new([far, loads])?, low)?;
//!
//! fm.fuzzify("DistanceToTarget", 10.0)?;
//! fm.fuzzify("AmmoStatus", 80.0)?;
//! let score = fm.defuzzify("Desirability", DefuzzifyMethod::MaxAv)?;
//! assert_eq!(score, 87.5);
//! # Ok(())
//! # }
//! ```

pub mod defuzzify;
pub mod error;
pub mod membership;
pub mod module;
pub mod rule;
pub mod set;
pub mod variable;

// Re-export core types for ergonomic API
pub use defuzzify::DefuzzifyMethod;
pub use error::{FuzzyError, Result};
pub use membership::MembershipShape;
pub use module::{FuzzyModule, VariableId};
pub use rule::{Consequent, FuzzyRule, FzAnd, SetId};
pub use set::FuzzySet;
pub use variable::LinguisticVariable;
