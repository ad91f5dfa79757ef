//! Weapons as fuzzy decision clients.
//!
//! Each weapon owns a [`fuzzy_logic::FuzzyModule`] that it configures once at
//! construction and queries whenever the owning agent wants to know how
//! desirable the weapon is against a target at a given distance. The
//! [`WeaponSystem`] ranks those scores to pick the weapon to hold.
//!
//! The game world, the owning agent and rendering live outside this crate;
//! they are reached through the [`WeaponOwner`] and [`Battlefield`] traits.

pub mod error;
pub mod geometry;
pub mod params;
pub mod system;
pub mod weapon;
pub mod world;

pub use error::{Result, WeaponError};
pub use geometry::Vec2;
pub use params::{ShotgunParams, WeaponParams};
pub use system::{WeaponSystem, build};
pub use weapon::{RocketLauncher, Shotgun, Weapon, WeaponKind, WeaponState};
pub use world::{Battlefield, ProjectileKind, WeaponOwner};
