//! Weapon tuning resolved from script constants.
//!
//! Keys follow the `<Weapon>_<Param>` convention of the script table, e.g.
//! `ShotGun_IdealRange` or `RocketLauncher_FiringFreq`.

use game_script::ScriptConstants;

use crate::{Result, WeaponError, WeaponKind};

/// Parameters shared by every weapon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponParams {
    /// Rounds carried when the weapon is first picked up.
    pub default_rounds: u32,
    pub max_rounds: u32,
    /// Shots per second.
    pub firing_freq: f64,
    /// Distance at which the weapon is most effective.
    pub ideal_range: f64,
    pub max_projectile_speed: f64,
    /// Radius within which other agents hear a shot.
    pub sound_range: f64,
}

impl WeaponParams {
    /// Reads the parameters of `kind` from `script`.
    pub fn from_script(kind: WeaponKind, script: &ScriptConstants) -> Result<Self> {
        let prefix = kind.script_prefix();
        let key = |param: &str| format!("{prefix}_{param}");

        let params = Self {
            default_rounds: script.get_u32(&key("DefaultRounds"))?,
            max_rounds: script.get_u32(&key("MaxRoundsCarried"))?,
            firing_freq: script.get_f64(&key("FiringFreq"))?,
            ideal_range: script.get_f64(&key("IdealRange"))?,
            max_projectile_speed: script.get_f64(kind.projectile_speed_key())?,
            sound_range: script.get_f64(&key("SoundRange"))?,
        };

        positive(&key("FiringFreq"), params.firing_freq)?;
        non_negative(&key("IdealRange"), params.ideal_range)?;
        non_negative(kind.projectile_speed_key(), params.max_projectile_speed)?;
        non_negative(&key("SoundRange"), params.sound_range)?;
        Ok(params)
    }

    /// Seconds between two consecutive shots.
    #[inline]
    pub fn shot_interval(&self) -> f64 {
        1.0 / self.firing_freq
    }
}

/// Shotgun specific tuning on top of [`WeaponParams`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShotgunParams {
    pub base: WeaponParams,
    /// Pellets per cartridge.
    pub pellets: u32,
    /// Maximum angular deviation of a pellet, in radians.
    pub spread: f64,
}

impl ShotgunParams {
    pub fn from_script(script: &ScriptConstants) -> Result<Self> {
        let base = WeaponParams::from_script(WeaponKind::Shotgun, script)?;
        let pellets = script.get_u32("ShotGun_NumBallsInShell")?;
        let spread = script.get_f64("ShotGun_Spread")?;
        non_negative("ShotGun_Spread", spread)?;
        Ok(Self {
            base,
            pellets,
            spread,
        })
    }
}

fn positive(key: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WeaponError::InvalidParam {
            key: key.to_owned(),
            value,
            reason: "must be finite and greater than zero",
        })
    }
}

fn non_negative(key: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WeaponError::InvalidParam {
            key: key.to_owned(),
            value,
            reason: "must be finite and not negative",
        })
    }
}
