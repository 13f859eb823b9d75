//! Node-chain backend: source → gain node → output mix.
//!
//! Mirrors the graph-based platform variant, where boost is a gain node
//! patched between a player source and the output mix. The whole graph
//! must be running for control calls to take effect; releasing the effect
//! stops the graph before the nodes are dropped.
//!
//! Unlike the enhancer variant this backend keeps its gain as a dB float.
//! Both variants observe the same canonical curve, so the same multiplier
//! produces the same audible amplification either way.

use crate::backend::{BoostEffect, EffectBackend};
use crate::{AudioSessionId, BackendError};
use fuerte_core::GainDb;

/// Single gain stage patched between source and output mix.
#[derive(Debug)]
struct GainNode {
    gain: GainDb,
    bypass: bool,
}

impl GainNode {
    fn new() -> Self {
        Self {
            gain: GainDb::ZERO,
            bypass: false,
        }
    }

    fn process_inplace(&self, block: &mut [f32]) {
        if self.bypass {
            return;
        }
        let gain = self.gain.to_linear();
        for sample in block.iter_mut() {
            *sample = (*sample * gain).clamp(-1.0, 1.0);
        }
    }
}

/// Factory for [`GraphChainEffect`] instances.
///
/// The graph variant owns its own engine and only addresses the global
/// output mix; per-session attachment is rejected with
/// [`BackendError::InvalidSession`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBackend;

impl GraphBackend {
    /// Creates the graph backend.
    pub fn new() -> Self {
        Self
    }
}

impl EffectBackend for GraphBackend {
    fn name(&self) -> &str {
        "graph"
    }

    fn create(
        &self,
        session: AudioSessionId,
    ) -> std::result::Result<Box<dyn BoostEffect>, BackendError> {
        if !session.is_global_mix() {
            return Err(BackendError::InvalidSession(session));
        }
        Ok(Box::new(GraphChainEffect::start()?))
    }
}

/// A started node chain with a single gain stage.
///
/// Constructed running with unity gain. [`BoostEffect::release`] stops the
/// graph; control calls on a stopped graph fail with
/// [`BackendError::GraphStopped`].
#[derive(Debug)]
pub struct GraphChainEffect {
    gain_node: GainNode,
    running: bool,
}

impl GraphChainEffect {
    /// Builds the source → gain → mix chain and starts the graph.
    pub fn start() -> std::result::Result<Self, BackendError> {
        tracing::info!("audio graph started");
        Ok(Self {
            gain_node: GainNode::new(),
            running: true,
        })
    }

    /// True while the graph is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Renders a block through the chain. Pass-through once stopped.
    pub fn process_block_inplace(&self, block: &mut [f32]) {
        if self.running {
            self.gain_node.process_inplace(block);
        }
    }

    fn guard(&self) -> std::result::Result<(), BackendError> {
        if self.running {
            Ok(())
        } else {
            Err(BackendError::GraphStopped)
        }
    }
}

impl BoostEffect for GraphChainEffect {
    fn set_enabled(&mut self, enabled: bool) -> std::result::Result<(), BackendError> {
        self.guard()?;
        self.gain_node.bypass = !enabled;
        Ok(())
    }

    fn set_gain(&mut self, gain: GainDb) -> std::result::Result<(), BackendError> {
        self.guard()?;
        self.gain_node.gain = gain;
        tracing::debug!(db = gain.db(), "gain node updated");
        Ok(())
    }

    fn target_gain(&self) -> GainDb {
        self.gain_node.gain
    }

    fn release(&mut self) -> std::result::Result<(), BackendError> {
        self.running = false;
        tracing::info!("audio graph stopped");
        Ok(())
    }
}
