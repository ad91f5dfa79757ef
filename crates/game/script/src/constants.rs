//! String-keyed numeric constants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Errors raised when a constant is missing or has the wrong type.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("script constant '{0}' is not defined")]
    MissingKey(String),

    #[error("script constant '{key}' = {value} is not a non-negative integer")]
    NotAnInteger { key: String, value: f64 },
}

/// A single scripted value.
///
/// Integers widen to floats on read; floats never narrow to integers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Integer(i64),
    Float(f64),
}

impl ScriptValue {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// Flat table of named constants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptConstants {
    values: BTreeMap<String, ScriptValue>,
}

impl ScriptConstants {
    /// Built-in weapon tuning.
    const DEFAULTS: &'static [(&'static str, ScriptValue)] = &[
        ("ShotGun_DefaultRounds", ScriptValue::Integer(15)),
        ("ShotGun_MaxRoundsCarried", ScriptValue::Integer(50)),
        ("ShotGun_FiringFreq", ScriptValue::Float(1.0)),
        ("ShotGun_IdealRange", ScriptValue::Float(100.0)),
        ("ShotGun_NumBallsInShell", ScriptValue::Integer(10)),
        ("ShotGun_Spread", ScriptValue::Float(0.05)),
        ("ShotGun_SoundRange", ScriptValue::Float(400.0)),
        ("Pellet_MaxSpeed", ScriptValue::Float(5000.0)),
        ("RocketLauncher_DefaultRounds", ScriptValue::Integer(15)),
        ("RocketLauncher_MaxRoundsCarried", ScriptValue::Integer(50)),
        ("RocketLauncher_FiringFreq", ScriptValue::Float(1.5)),
        ("RocketLauncher_IdealRange", ScriptValue::Float(150.0)),
        ("RocketLauncher_SoundRange", ScriptValue::Float(400.0)),
        ("Rocket_MaxSpeed", ScriptValue::Float(10.0)),
    ];

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated with the built-in weapon tuning.
    pub fn defaults() -> Self {
        let values = Self::DEFAULTS
            .iter()
            .map(|(key, value)| ((*key).to_owned(), *value))
            .collect();
        Self { values }
    }

    /// Parses a flat TOML table of numbers.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: ScriptConstants) {
        self.values.extend(other.values);
    }

    /// Sets or replaces a constant (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: ScriptValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<ScriptValue> {
        self.values.get(key).copied()
    }

    pub fn get_f64(&self, key: &str) -> Result<f64, ScriptError> {
        self.get(key)
            .map(ScriptValue::as_f64)
            .ok_or_else(|| ScriptError::MissingKey(key.to_owned()))
    }

    pub fn get_u32(&self, key: &str) -> Result<u32, ScriptError> {
        match self.get(key) {
            Some(ScriptValue::Integer(v)) => {
                u32::try_from(v).map_err(|_| ScriptError::NotAnInteger {
                    key: key.to_owned(),
                    value: v as f64,
                })
            }
            Some(ScriptValue::Float(value)) => Err(ScriptError::NotAnInteger {
                key: key.to_owned(),
                value,
            }),
            None => Err(ScriptError::MissingKey(key.to_owned())),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
