//! Score every weapon for a single situation.

use anyhow::{Context, Result};
use armory::{WeaponKind, WeaponSystem};
use clap::Parser;
use console::style;

use super::Common;

/// Score every weapon for one situation and pick the best
#[derive(Parser, Debug)]
pub struct Score {
    /// Distance to the target
    #[arg(long)]
    pub distance: f64,

    /// Shotgun rounds carried (defaults to the scripted starting rounds)
    #[arg(long)]
    pub shotgun_ammo: Option<u32>,

    /// Rockets carried (defaults to the scripted starting rounds)
    #[arg(long)]
    pub rockets: Option<u32>,

    #[command(flatten)]
    pub common: Common,
}

impl Score {
    pub fn execute(self) -> Result<()> {
        let script = self.common.script()?;
        let mut system =
            WeaponSystem::fully_armed(&script).context("Failed to build weapons from script")?;
        system.set_method(self.common.method());

        for (kind, rounds) in [
            (WeaponKind::Shotgun, self.shotgun_ammo),
            (WeaponKind::RocketLauncher, self.rockets),
        ] {
            if let (Some(rounds), Some(weapon)) = (rounds, system.weapon_mut(kind)) {
                weapon.state_mut().set_rounds(rounds);
            }
        }

        let scores = system.rank(self.distance)?;
        let best = system.select_ranked(&scores);

        println!("distance {:.1}", self.distance);
        for (kind, score) in scores {
            let rounds = system
                .weapon(kind)
                .map(|w| w.state().rounds_remaining())
                .unwrap_or_default();
            let line = format!("  {:<16} rounds {:>3}  desirability {:>6.2}", kind, rounds, score);
            if Some(kind) == best {
                println!("{} {}", style("▶").green().bold(), style(line.trim_start()).bold());
            } else {
                println!("{line}");
            }
        }

        Ok(())
    }
}
