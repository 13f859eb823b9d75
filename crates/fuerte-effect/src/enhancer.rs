//! Session-attached loudness enhancer backend.
//!
//! Mirrors the single-effect platform variant: one enhancer object is
//! attached directly to an audio session and takes its target gain as an
//! integer millibel value. Fractional millibels are truncated toward zero
//! at the [`BoostEffect::set_gain`] boundary, so `target_gain` reports the
//! value the platform effect actually holds.

use crate::backend::{BoostEffect, EffectBackend};
use crate::{AudioSessionId, BackendError};
use fuerte_core::{GainDb, GainMillibels};

/// Factory for [`EnhancerEffect`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionEnhancer;

impl SessionEnhancer {
    /// Creates the enhancer backend.
    pub fn new() -> Self {
        Self
    }
}

impl EffectBackend for SessionEnhancer {
    fn name(&self) -> &str {
        "enhancer"
    }

    fn create(
        &self,
        session: AudioSessionId,
    ) -> std::result::Result<Box<dyn BoostEffect>, BackendError> {
        Ok(Box::new(EnhancerEffect::attach(session)?))
    }
}

/// A loudness enhancer attached to one audio session.
///
/// Starts disabled with a 0 mB target. While enabled, processing applies
/// the millibel target as a linear factor and hard-limits the result to
/// \[-1, 1\].
#[derive(Debug)]
pub struct EnhancerEffect {
    session: AudioSessionId,
    target: GainMillibels,
    enabled: bool,
    released: bool,
}

impl EnhancerEffect {
    /// Attaches an enhancer to `session`.
    pub fn attach(session: AudioSessionId) -> std::result::Result<Self, BackendError> {
        tracing::info!(session = session.raw(), "enhancer attached");
        Ok(Self {
            session,
            target: GainMillibels::ZERO,
            enabled: false,
            released: false,
        })
    }

    /// The session this enhancer is attached to.
    pub fn session(&self) -> AudioSessionId {
        self.session
    }

    /// The target gain as the platform effect holds it.
    pub fn target_millibels(&self) -> GainMillibels {
        self.target
    }

    /// True while the effect amplifies the signal.
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.released
    }

    /// Applies the current target gain to an interleaved f32 block.
    ///
    /// Pass-through while disabled or released. Output is hard-limited to
    /// \[-1, 1\].
    pub fn process_block_inplace(&self, block: &mut [f32]) {
        if !self.is_enabled() {
            return;
        }
        let gain = self.target.to_db().to_linear();
        for sample in block.iter_mut() {
            *sample = (*sample * gain).clamp(-1.0, 1.0);
        }
    }

    fn guard(&self) -> std::result::Result<(), BackendError> {
        if self.released {
            Err(BackendError::Released)
        } else {
            Ok(())
        }
    }
}

impl BoostEffect for EnhancerEffect {
    fn set_enabled(&mut self, enabled: bool) -> std::result::Result<(), BackendError> {
        self.guard()?;
        self.enabled = enabled;
        Ok(())
    }

    fn set_gain(&mut self, gain: GainDb) -> std::result::Result<(), BackendError> {
        self.guard()?;
        self.target = gain.to_millibels();
        tracing::debug!(millibels = self.target.get(), "enhancer target gain");
        Ok(())
    }

    fn target_gain(&self) -> GainDb {
        self.target.to_db()
    }

    fn release(&mut self) -> std::result::Result<(), BackendError> {
        self.released = true;
        self.enabled = false;
        tracing::info!(session = self.session.raw(), "enhancer released");
        Ok(())
    }
}
