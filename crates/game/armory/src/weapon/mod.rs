//! Weapons and their shared bookkeeping.
//!
//! Every weapon follows the same contract:
//!
//! 1. At construction, build a [`FuzzyModule`] with `DistanceToTarget`,
//!    `AmmoStatus` and `Desirability` variables plus a rule base
//! 2. On [`Weapon::desirability`], return 0 straight away when out of ammo,
//!    otherwise fuzzify distance and ammo and defuzzify `Desirability`
//!
//! Desirability is on a shared 0..100 scale so scores of different weapons
//! can be compared directly.

mod rocket_launcher;
mod shotgun;

pub use rocket_launcher::RocketLauncher;
pub use shotgun::Shotgun;

use fuzzy_logic::{DefuzzifyMethod, FuzzyModule, SetId, VariableId};
use rand::RngCore;

use crate::{Battlefield, Result, Vec2, WeaponOwner, WeaponParams};

pub(crate) const DISTANCE_TO_TARGET: &str = "DistanceToTarget";
pub(crate) const AMMO_STATUS: &str = "AmmoStatus";
pub(crate) const DESIRABILITY: &str = "Desirability";

/// Weapon type.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    Shotgun,
    RocketLauncher,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 2] = [WeaponKind::Shotgun, WeaponKind::RocketLauncher];

    /// Prefix of this weapon's keys in the script table.
    pub const fn script_prefix(self) -> &'static str {
        match self {
            Self::Shotgun => "ShotGun",
            Self::RocketLauncher => "RocketLauncher",
        }
    }

    /// Script key holding the top speed of the weapon's projectile.
    pub const fn projectile_speed_key(self) -> &'static str {
        match self {
            Self::Shotgun => "Pellet_MaxSpeed",
            Self::RocketLauncher => "Rocket_MaxSpeed",
        }
    }
}

/// A weapon an agent can hold, score and fire.
pub trait Weapon: Send {
    fn kind(&self) -> WeaponKind;

    fn state(&self) -> &WeaponState;

    fn state_mut(&mut self) -> &mut WeaponState;

    /// Scores how desirable this weapon is against a target `distance` away,
    /// on a 0..100 scale.
    fn desirability(&mut self, distance: f64) -> Result<f64>;

    /// Fires at `target` if the weapon has ammo and has cooled down.
    ///
    /// Returns `true` when a shot was taken.
    fn shoot_at(
        &mut self,
        owner: &dyn WeaponOwner,
        world: &mut dyn Battlefield,
        target: Vec2,
        now: f64,
        rng: &mut dyn RngCore,
    ) -> bool;
}

/// Ammo, cooldown and decision state common to all weapons.
#[derive(Clone, Debug)]
pub struct WeaponState {
    params: WeaponParams,
    rounds_remaining: u32,
    time_next_available: f64,
    last_desirability: f64,
    method: DefuzzifyMethod,
    fuzzy: FuzzyModule,
}

impl WeaponState {
    pub(crate) fn new(params: WeaponParams, fuzzy: FuzzyModule) -> Self {
        Self {
            params,
            rounds_remaining: params.default_rounds.min(params.max_rounds),
            time_next_available: 0.0,
            last_desirability: 0.0,
            method: DefuzzifyMethod::MaxAv,
            fuzzy,
        }
    }

    #[inline]
    pub fn params(&self) -> &WeaponParams {
        &self.params
    }

    #[inline]
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    /// Adds rounds, never exceeding the weapon's maximum.
    pub fn increment_rounds(&mut self, rounds: u32) {
        self.rounds_remaining = self
            .rounds_remaining
            .saturating_add(rounds)
            .min(self.params.max_rounds);
    }

    /// Sets the round count directly, clamped to the maximum.
    pub fn set_rounds(&mut self, rounds: u32) {
        self.rounds_remaining = rounds.min(self.params.max_rounds);
    }

    pub(crate) fn decrement_rounds(&mut self) {
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
    }

    #[inline]
    pub fn is_ready_for_next_shot(&self, now: f64) -> bool {
        now >= self.time_next_available
    }

    pub(crate) fn update_time_next_available(&mut self, now: f64) {
        self.time_next_available = now + self.params.shot_interval();
    }

    #[inline]
    pub fn time_next_available(&self) -> f64 {
        self.time_next_available
    }

    /// Score from the last query that reached the fuzzy module.
    #[inline]
    pub fn last_desirability(&self) -> f64 {
        self.last_desirability
    }

    #[inline]
    pub fn method(&self) -> DefuzzifyMethod {
        self.method
    }

    /// Switches the defuzzification strategy used by future queries.
    pub fn set_method(&mut self, method: DefuzzifyMethod) {
        self.method = method;
    }

    #[inline]
    pub fn fuzzy_module(&self) -> &FuzzyModule {
        &self.fuzzy
    }

    /// Standard query: fuzzify distance and ammo, defuzzify desirability.
    ///
    /// An empty weapon scores 0 without touching the fuzzy module.
    pub(crate) fn score(&mut self, vars: &ScoringVariables, distance: f64) -> Result<f64> {
        if self.rounds_remaining == 0 {
            return Ok(0.0);
        }

        self.fuzzy.fuzzify_variable(vars.distance, distance)?;
        self.fuzzy
            .fuzzify_variable(vars.ammo, f64::from(self.rounds_remaining))?;
        let desire = self.fuzzy.defuzzify_variable(vars.desirability, self.method)?;

        self.last_desirability = desire;
        Ok(desire)
    }
}

/// Variable ids a weapon queries every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScoringVariables {
    pub distance: VariableId,
    pub ammo: VariableId,
    pub desirability: VariableId,
}

/// Distance sets shared by every weapon.
pub(crate) struct DistanceSets {
    pub close: SetId,
    pub medium: SetId,
    pub far: SetId,
}

/// Output sets shared by every weapon.
pub(crate) struct DesirabilitySets {
    pub very_desirable: SetId,
    pub desirable: SetId,
    pub undesirable: SetId,
}

pub(crate) fn add_distance_variable(
    fm: &mut FuzzyModule,
) -> fuzzy_logic::Result<(VariableId, DistanceSets)> {
    let var = fm.create_variable(DISTANCE_TO_TARGET)?;
    let sets = DistanceSets {
        close: fm.add_left_shoulder_set(var, "Target_Close", 0.0, 25.0, 150.0)?,
        medium: fm.add_triangular_set(var, "Target_Medium", 25.0, 150.0, 300.0)?,
        far: fm.add_right_shoulder_set(var, "Target_Far", 150.0, 300.0, 1000.0)?,
    };
    Ok((var, sets))
}

pub(crate) fn add_desirability_variable(
    fm: &mut FuzzyModule,
) -> fuzzy_logic::Result<(VariableId, DesirabilitySets)> {
    let var = fm.create_variable(DESIRABILITY)?;
    let sets = DesirabilitySets {
        very_desirable: fm.add_right_shoulder_set(var, "VeryDesirable", 50.0, 75.0, 100.0)?,
        desirable: fm.add_triangular_set(var, "Desirable", 25.0, 50.0, 75.0)?,
        undesirable: fm.add_left_shoulder_set(var, "Undesirable", 0.0, 25.0, 50.0)?,
    };
    Ok((var, sets))
}
