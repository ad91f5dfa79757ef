//! Weapon inventory and selection.

use fuzzy_logic::DefuzzifyMethod;
use game_script::ScriptConstants;

use crate::{Result, RocketLauncher, Shotgun, Weapon, WeaponKind};

/// The weapons carried by one agent and the one currently held.
///
/// Every weapon owns its own fuzzy module, so a `WeaponSystem` must not be
/// shared between agents.
#[derive(Default)]
pub struct WeaponSystem {
    weapons: Vec<Box<dyn Weapon>>,
    current: Option<usize>,
}

impl WeaponSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A system carrying one of every weapon, built from `script`.
    pub fn fully_armed(script: &ScriptConstants) -> Result<Self> {
        let mut system = Self::new();
        for kind in WeaponKind::ALL {
            system.add_weapon(build(kind, script)?);
        }
        Ok(system)
    }

    /// Adds a weapon. Picking up a weapon already carried only adds its
    /// rounds to the existing one.
    pub fn add_weapon(&mut self, weapon: Box<dyn Weapon>) {
        let kind = weapon.kind();
        if let Some(existing) = self.weapon_mut(kind) {
            let extra = weapon.state().rounds_remaining();
            existing.state_mut().increment_rounds(extra);
            tracing::debug!(%kind, extra, "merged ammo into carried weapon");
            return;
        }

        self.weapons.push(weapon);
        if self.current.is_none() {
            self.current = Some(self.weapons.len() - 1);
        }
    }

    pub fn weapon(&self, kind: WeaponKind) -> Option<&dyn Weapon> {
        self.weapons
            .iter()
            .find(|w| w.kind() == kind)
            .map(|w| w.as_ref())
    }

    pub fn weapon_mut(&mut self, kind: WeaponKind) -> Option<&mut (dyn Weapon + 'static)> {
        self.weapons
            .iter_mut()
            .find(|w| w.kind() == kind)
            .map(|w| w.as_mut())
    }

    pub fn current(&self) -> Option<&dyn Weapon> {
        self.current.map(|i| self.weapons[i].as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Weapon + 'static)> {
        let index = self.current?;
        Some(self.weapons[index].as_mut())
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Sets the defuzzification strategy of every carried weapon.
    pub fn set_method(&mut self, method: DefuzzifyMethod) {
        for weapon in &mut self.weapons {
            weapon.state_mut().set_method(method);
        }
    }

    /// Scores every carried weapon against a target `distance` away, in
    /// carry order.
    pub fn rank(&mut self, distance: f64) -> Result<Vec<(WeaponKind, f64)>> {
        self.weapons
            .iter_mut()
            .map(|weapon| Ok((weapon.kind(), weapon.desirability(distance)?)))
            .collect()
    }

    /// Switches to the most desirable weapon for a target `distance` away and
    /// returns it.
    pub fn select_best(&mut self, distance: f64) -> Result<Option<WeaponKind>> {
        let scores = self.rank(distance)?;
        Ok(self.select_ranked(&scores))
    }

    /// Switches to the best weapon of an existing [`rank`](Self::rank) result
    /// without re-running any fuzzy module.
    ///
    /// Ties keep the earliest entry. When nothing scores above 0, or the best
    /// entry is not carried, the current weapon is kept.
    pub fn select_ranked(&mut self, scores: &[(WeaponKind, f64)]) -> Option<WeaponKind> {
        let best = scores
            .iter()
            .filter(|(_, score)| *score > 0.0)
            .fold(None, |best: Option<(WeaponKind, f64)>, &(kind, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((kind, score)),
            });

        let carried = best.and_then(|(kind, score)| {
            let index = self.weapons.iter().position(|w| w.kind() == kind)?;
            Some((index, kind, score))
        });

        match carried {
            Some((index, kind, score)) => {
                if self.current != Some(index) {
                    tracing::debug!(%kind, score, "switching weapon");
                }
                self.current = Some(index);
                Some(kind)
            }
            None => {
                tracing::debug!("no carried weapon scored above zero, keeping current");
                self.current().map(|w| w.kind())
            }
        }
    }
}

/// Builds a weapon of `kind` from script constants.
pub fn build(kind: WeaponKind, script: &ScriptConstants) -> Result<Box<dyn Weapon>> {
    Ok(match kind {
        WeaponKind::Shotgun => Box::new(Shotgun::new(script)?),
        WeaponKind::RocketLauncher => Box::new(RocketLauncher::new(script)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> WeaponSystem {
        WeaponSystem::fully_armed(&ScriptConstants::defaults()).unwrap()
    }

    #[test]
    fn first_weapon_becomes_current() {
        let system = armed();
        assert_eq!(system.len(), 2);
        assert_eq!(system.current().map(|w| w.kind()), Some(WeaponKind::Shotgun));
    }

    #[test]
    fn duplicate_pickup_adds_ammo() {
        let script = ScriptConstants::defaults();
        let mut system = armed();
        system
            .weapon_mut(WeaponKind::Shotgun)
            .unwrap()
            .state_mut()
            .set_rounds(5);

        system.add_weapon(build(WeaponKind::Shotgun, &script).unwrap());

        assert_eq!(system.len(), 2);
        let rounds = system
            .weapon(WeaponKind::Shotgun)
            .unwrap()
            .state()
            .rounds_remaining();
        assert_eq!(rounds, 20);
    }

    #[test]
    fn picks_shotgun_up_close_and_rockets_at_medium_range() {
        let mut system = armed();
        assert_eq!(system.select_best(10.0), Ok(Some(WeaponKind::Shotgun)));
        assert_eq!(system.select_best(200.0), Ok(Some(WeaponKind::RocketLauncher)));
        assert_eq!(
            system.current().map(|w| w.kind()),
            Some(WeaponKind::RocketLauncher)
        );
    }

    #[test]
    fn keeps_current_weapon_when_everything_is_empty() {
        let mut system = armed();
        system.select_best(200.0).unwrap();
        for kind in WeaponKind::ALL {
            system.weapon_mut(kind).unwrap().state_mut().set_rounds(0);
        }

        assert_eq!(system.select_best(10.0), Ok(Some(WeaponKind::RocketLauncher)));
        assert_eq!(
            system.rank(10.0),
            Ok(vec![
                (WeaponKind::Shotgun, 0.0),
                (WeaponKind::RocketLauncher, 0.0),
            ])
        );
    }

    #[test]
    fn select_ranked_trusts_the_given_scores() {
        let mut system = armed();
        system.select_best(200.0).unwrap();

        // the scores alone decide, the weapons' own modules are not consulted
        let scores = [
            (WeaponKind::Shotgun, 60.0),
            (WeaponKind::RocketLauncher, 10.0),
        ];
        assert_eq!(system.select_ranked(&scores), Some(WeaponKind::Shotgun));
        assert_eq!(system.current().map(|w| w.kind()), Some(WeaponKind::Shotgun));
    }

    #[test]
    fn select_ranked_ignores_weapons_not_carried() {
        let mut system = WeaponSystem::new();
        system.add_weapon(build(WeaponKind::Shotgun, &ScriptConstants::defaults()).unwrap());

        let scores = [(WeaponKind::RocketLauncher, 90.0), (WeaponKind::Shotgun, 0.0)];
        assert_eq!(system.select_ranked(&scores), Some(WeaponKind::Shotgun));
    }

    #[test]
    fn empty_system_selects_nothing() {
        let mut system = WeaponSystem::new();
        assert_eq!(system.select_best(50.0), Ok(None));
    }
}
