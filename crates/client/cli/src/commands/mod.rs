//! CLI subcommands.

mod score;
mod sweep;

pub use score::Score;
pub use sweep::Sweep;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use fuzzy_logic::DefuzzifyMethod;
use game_script::{ScriptConstants, ScriptLoader};

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct Common {
    /// TOML file overriding the built-in weapon constants
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Defuzzification strategy
    #[arg(long, value_enum, default_value_t = Method::MaxAv)]
    pub method: Method,

    /// Sample count for centroid defuzzification
    #[arg(long, default_value_t = DefuzzifyMethod::DEFAULT_CENTROID_SAMPLES)]
    pub samples: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    MaxAv,
    Centroid,
}

impl Common {
    pub fn script(&self) -> Result<ScriptConstants> {
        ScriptLoader::load_with_defaults(self.script.as_deref())
    }

    pub fn method(&self) -> DefuzzifyMethod {
        match self.method {
            Method::MaxAv => DefuzzifyMethod::MaxAv,
            Method::Centroid => DefuzzifyMethod::Centroid {
                samples: self.samples,
            },
        }
    }
}
