//! Scripted tunable constants.
//!
//! Weapons read their balance parameters (ideal range, firing frequency,
//! spread, ...) from a flat string-keyed table of numbers. The table ships with
//! built-in defaults and can be overlaid with a TOML file:
//!
//! ```toml
//! ShotGun_IdealRange = 120.0
//! ShotGun_NumBallsInShell = 12
//! ```

pub mod constants;
pub mod loader;

pub use constants::{ScriptConstants, ScriptError, ScriptValue};
pub use loader::{LoadResult, ScriptLoader};
