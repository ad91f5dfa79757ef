//! Desirability of one weapon across distances.

use anyhow::{Result, bail};
use armory::{WeaponKind, build};
use clap::Parser;

use super::Common;

/// Print one weapon's desirability across a range of distances
#[derive(Parser, Debug)]
pub struct Sweep {
    /// Weapon to inspect (shotgun, rocket_launcher)
    #[arg(long)]
    pub weapon: WeaponKind,

    /// Rounds carried
    #[arg(long)]
    pub ammo: u32,

    /// First distance
    #[arg(long, default_value_t = 0.0)]
    pub from: f64,

    /// Last distance
    #[arg(long, default_value_t = 500.0)]
    pub to: f64,

    /// Distance between rows
    #[arg(long, default_value_t = 25.0)]
    pub step: f64,

    #[command(flatten)]
    pub common: Common,
}

/// Upper bound on printed rows.
const MAX_ROWS: f64 = 10_000.0;

impl Sweep {
    pub fn execute(self) -> Result<()> {
        let rows = distances(self.from, self.to, self.step)?;

        let script = self.common.script()?;
        let mut weapon = build(self.weapon, &script)?;
        weapon.state_mut().set_method(self.common.method());
        weapon.state_mut().set_rounds(self.ammo);

        println!(
            "{} with {} rounds",
            self.weapon,
            weapon.state().rounds_remaining()
        );
        for distance in rows {
            let score = weapon.desirability(distance)?;
            let bar = "#".repeat((score / 2.5).round() as usize);
            println!("{distance:>8.1}  {score:>6.2}  {bar}");
        }

        Ok(())
    }
}

/// Distances from `from` to `to` (inclusive) in steps of `step`.
fn distances(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        bail!("--from, --to and --step must be finite numbers");
    }
    if step <= 0.0 {
        bail!("--step must be greater than zero");
    }
    if to < from {
        bail!("--to must not be smaller than --from");
    }

    let rows = ((to - from) / step).floor();
    if rows >= MAX_ROWS {
        bail!("sweep would print more than {MAX_ROWS} rows, increase --step");
    }

    Ok((0..=rows as u32)
        .map(|i| from + step * f64::from(i))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_include_both_ends() {
        assert_eq!(
            distances(0.0, 100.0, 25.0).unwrap(),
            vec![0.0, 25.0, 50.0, 75.0, 100.0]
        );
        assert_eq!(distances(10.0, 10.0, 1.0).unwrap(), vec![10.0]);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(distances(0.0, f64::INFINITY, 25.0).is_err());
        assert!(distances(f64::NEG_INFINITY, 0.0, 25.0).is_err());
        assert!(distances(0.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_bad_step_and_reversed_range() {
        assert!(distances(0.0, 100.0, 0.0).is_err());
        assert!(distances(0.0, 100.0, -5.0).is_err());
        assert!(distances(100.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn caps_row_count() {
        let err = distances(0.0, 1000.0, 1e-6).unwrap_err();
        assert!(err.to_string().contains("rows"));
        assert_eq!(distances(0.0, 9_999.0, 1.0).unwrap().len(), 10_000);
    }
}
