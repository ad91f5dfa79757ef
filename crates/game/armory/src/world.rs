//! Collaborators a weapon talks to but does not own.

use crate::Vec2;

/// The agent carrying a weapon.
pub trait WeaponOwner {
    /// Stable identifier of the agent, used to attribute projectiles and noise.
    fn id(&self) -> u32;

    fn position(&self) -> Vec2;
}

/// What a weapon leaves behind in the world when fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Pellet,
    Rocket,
}

/// The game world as seen from a weapon.
pub trait Battlefield {
    /// Spawns a projectile travelling from the owner's position towards
    /// `target`.
    fn add_projectile(&mut self, owner: u32, kind: ProjectileKind, origin: Vec2, target: Vec2);

    /// Lets other agents within `range` of `origin` hear the shot.
    fn add_sound_trigger(&mut self, owner: u32, origin: Vec2, range: f64);
}
