//! Close range scatter weapon.

use fuzzy_logic::{FuzzyModule, FzAnd};
use game_script::ScriptConstants;
use rand::{Rng, RngCore};

use super::{
    AMMO_STATUS, ScoringVariables, Weapon, WeaponKind, WeaponState, add_desirability_variable,
    add_distance_variable,
};
use crate::{Battlefield, ProjectileKind, Result, ShotgunParams, Vec2, WeaponOwner};

/// Fires a spread of pellets per cartridge. Most desirable up close, and still
/// worth using at medium range while ammo is plentiful.
#[derive(Clone, Debug)]
pub struct Shotgun {
    state: WeaponState,
    pellets: u32,
    spread: f64,
    vars: ScoringVariables,
}

impl Shotgun {
    pub fn new(script: &ScriptConstants) -> Result<Self> {
        let params = ShotgunParams::from_script(script)?;
        let (fuzzy, vars) = Self::initialize_fuzzy_module()?;

        tracing::debug!(
            rounds = params.base.default_rounds,
            pellets = params.pellets,
            rules = fuzzy.rules().len(),
            "shotgun ready"
        );

        Ok(Self {
            state: WeaponState::new(params.base, fuzzy),
            pellets: params.pellets,
            spread: params.spread,
            vars,
        })
    }

    fn initialize_fuzzy_module() -> fuzzy_logic::Result<(FuzzyModule, ScoringVariables)> {
        let mut fm = FuzzyModule::new();

        let (distance, dist) = add_distance_variable(&mut fm)?;
        let (desirability, out) = add_desirability_variable(&mut fm)?;

        let ammo = fm.create_variable(AMMO_STATUS)?;
        let loads = fm.add_right_shoulder_set(ammo, "Ammo_Loads", 30.0, 60.0, 100.0)?;
        let okay = fm.add_triangular_set(ammo, "Ammo_Okay", 0.0, 30.0, 60.0)?;
        let low = fm.add_triangular_set(ammo, "Ammo_Low", 0.0, 0.0, 30.0)?;

        fm.add_rule(FzAnd::new([dist.close, loads])?, out.very_desirable)?;
        fm.add_rule(FzAnd::new([dist.close, okay])?, out.very_desirable)?;
        fm.add_rule(FzAnd::new([dist.close, low])?, out.very_desirable)?;

        fm.add_rule(FzAnd::new([dist.medium, loads])?, out.very_desirable)?;
        fm.add_rule(FzAnd::new([dist.medium, okay])?, out.desirable)?;
        fm.add_rule(FzAnd::new([dist.medium, low])?, out.undesirable)?;

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

    #[inline]
    pub fn pellets(&self) -> u32 {
        self.pellets
    }

    /// Maximum pellet deviation in radians.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Bell-shaped deviation in `[-spread, spread]`: the sum of two uniform
    /// draws, recentred.
    fn pellet_deviation(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(0.0..=self.spread) + rng.gen_range(0.0..=self.spread) - self.spread
    }
}

impl Weapon for Shotgun {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Shotgun
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
        rng: &mut dyn RngCore,
    ) -> bool {
        if self.state.rounds_remaining() == 0 || !self.state.is_ready_for_next_shot(now) {
            return false;
        }

        let origin = owner.position();
        let aim = target - origin;
        for _ in 0..self.pellets {
            let adjusted = aim.rotated(self.pellet_deviation(rng));
            world.add_projectile(owner.id(), ProjectileKind::Pellet, origin, origin + adjusted);
        }

        self.state.decrement_rounds();
        self.state.update_time_next_available(now);
        world.add_sound_trigger(owner.id(), origin, self.state.params().sound_range);

        tracing::trace!(
            owner = owner.id(),
            pellets = self.pellets,
            rounds_left = self.state.rounds_remaining(),
            "shotgun fired"
        );
        true
    }
}
