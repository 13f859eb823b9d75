//! CLI subcommands.

pub mod curve;
pub mod run;
pub mod serve;

use clap::ValueEnum;
use fuerte_effect::{EffectBackend, GraphBackend, SessionEnhancer};

/// Backend variants selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Session-attached loudness enhancer (integer millibels)
    Enhancer,
    /// Node-chain graph with explicit start/stop (dB floats)
    Graph,
}

impl BackendKind {
    /// Instantiates the selected backend.
    pub fn instantiate(self) -> Box<dyn EffectBackend> {
        match self {
            BackendKind::Enhancer => Box::new(SessionEnhancer::new()),
            BackendKind::Graph => Box::new(GraphBackend::new()),
        }
    }
}
