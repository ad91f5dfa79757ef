//! Explosive projectile weapon.

use fuzzy_logic::{FuzzyModule, FzAnd};
use game_script::ScriptConstants;
use rand::RngCore;

use super::{
    AMMO_STATUS, ScoringVariables, Weapon, WeaponKind, WeaponState, add_desirability_variable,
    add_distance_variable,
};
use crate::{Battlefield, ProjectileKind, Result, Vec2, WeaponOwner, WeaponParams};

/// Slow rockets with splash damage: poor at point blank range where the
/// blast would hurt the shooter, best at medium range.
#[derive(Clone, Debug)]
pub struct RocketLauncher {
    state: WeaponState,
    vars: ScoringVariables,
}

impl RocketLauncher {
    pub fn new(script: &ScriptConstants) -> Result<Self> {
        let params = WeaponParams::from_script(WeaponKind::RocketLauncher, script)?;
        let (fuzzy, vars) = Self::initialize_fuzzy_module()?;

        tracing::debug!(
            rounds = params.default_rounds,
            rules = fuzzy.rules().len(),
            "rocket launcher ready"
        );

        Ok(Self {
            state: WeaponState::new(params, fuzzy),
            vars,
        })
    }

    fn initialize_fuzzy_module() -> fuzzy_logic::Result<(FuzzyModule, ScoringVariables)> {
        let mut fm = FuzzyModule::new();

        let (distance, dist) = add_distance_variable(&mut fm)?;
        let (desirability, out) = add_desirability_variable(&mut fm)?;

        let ammo = fm.create_variable(AMMO_STATUS)?;
        let loads = fm.add_right_shoulder_set(ammo, "Ammo_Loads", 10.0, 30.0, 100.0)?;
        let okay = fm.add_triangular_set(ammo, "Ammo_Okay", 0.0, 10.0, 30.0)?;
        let low = fm.add_triangular_set(ammo, "Ammo_Low", 0.0, 0.0, 10.0)?;

        fm.add_rule(FzAnd::new([dist.close, loads])?, out.undesirable)?;
        fm.add_rule(FzAnd::new([dist.close, okay])?, out.undesirable)?;
        fm.add_rule(FzAnd::new([dist.close, low])?, out.undesirable)?;

        fm.add_rule(FzAnd::new([dist.medium, loads])?, out.very_desirable)?;
        fm.add_rule(FzAnd::new([dist.medium, okay])?, out.very_desirable)?;
        fm.add_rule(FzAnd::new([dist.medium, low])?, out.desirable)?;

        fm.add_rule(FzAnd::new([dist.far, loads])?, out.desirable)?;
        fm.add_rule(FzAnd::new([dist.far, okay])?, out.undesirable)?;
        fm.add_rule(FzAnd::new([dist.far, low])?, out.undesirable)?;

        let vars = ScoringVariables {
            distance,
            ammo,
            desirability,
        };
        Ok((fm, vars))
    }
}

impl Weapon for RocketLauncher {
    fn kind(&self) -> WeaponKind {
        WeaponKind::RocketLauncher
    }

    fn state(&self) -> &WeaponState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WeaponState {
        &mut self.state
    }

    fn desirability(&mut self, distance: f64) -> Result<f64> {
        self.state.score(&self.vars, distance)
    }

    fn shoot_at(
        &mut self,
        owner: &dyn WeaponOwner,
        world: &mut dyn Battlefield,
        target: Vec2,
        now: f64,
        _rng: &mut dyn RngCore,
    ) -> bool {
        if self.state.rounds_remaining() == 0 || !self.state.is_ready_for_next_shot(now) {
            return false;
        }

        let origin = owner.position();
        world.add_projectile(owner.id(), ProjectileKind::Rocket, origin, target);

        self.state.decrement_rounds();
        self.state.update_time_next_available(now);
        world.add_sound_trigger(owner.id(), origin, self.state.params().sound_range);
        true
    }
}
