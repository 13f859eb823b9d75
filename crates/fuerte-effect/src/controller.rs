//! Boost effect lifecycle.
//!
//! [`BoostController`] owns exactly one backend effect at a time and
//! validates every call against a three-state machine:
//!
//! ```text
//! Uninitialized ──init──▶ Active ──release──▶ Released
//!       ▲                   │  ▲                 │
//!       │                   │  └──────init───────┘
//!       └───────────────────┘      (re-entry)
//! ```
//!
//! The backend reference is an exclusively-owned, explicitly-scoped field —
//! acquired in [`BoostController::init`], dropped in
//! [`BoostController::release`], never shared process-wide.

use crate::backend::{BoostEffect, EffectBackend};
use crate::{AudioSessionId, Error, Result};
use fuerte_core::{BoostMultiplier, GainDb, boost_curve};

/// Lifecycle state of a [`BoostController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectState {
    /// No effect has been created yet.
    Uninitialized,
    /// An enabled backend effect is attached; boost values apply.
    Active,
    /// The effect was released; a fresh `init` is accepted.
    Released,
}

/// Validates lifecycle calls and delegates to an injected backend.
///
/// One controller serves one UI session; operations are synchronous and
/// strictly sequenced by the caller. Hosts that may invoke concurrently
/// should wrap the controller in a mutex (the bridge crate does exactly
/// that) so a release can never race a gain change against a freed
/// resource.
///
/// # Example
///
/// ```rust
/// use fuerte_effect::{AudioSessionId, BoostController, EffectState, SessionEnhancer};
///
/// let mut controller = BoostController::new(
///     Box::new(SessionEnhancer::new()),
///     AudioSessionId::GLOBAL_MIX,
/// );
/// assert_eq!(controller.state(), EffectState::Uninitialized);
///
/// controller.init()?;
/// controller.set_boost(3.5)?;
/// assert_eq!(controller.current_gain().unwrap().db(), 10.75);
///
/// controller.release()?;
/// assert_eq!(controller.state(), EffectState::Released);
/// # Ok::<(), fuerte_effect::Error>(())
/// ```
pub struct BoostController {
    backend: Box<dyn EffectBackend>,
    session: AudioSessionId,
    effect: Option<Box<dyn BoostEffect>>,
    state: EffectState,
}

impl BoostController {
    /// Creates a controller for the host-provided session.
    ///
    /// Starts in [`EffectState::Uninitialized`]; no backend resources are
    /// touched until [`Self::init`].
    pub fn new(backend: Box<dyn EffectBackend>, session: AudioSessionId) -> Self {
        Self {
            backend,
            session,
            effect: None,
            state: EffectState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EffectState {
        self.state
    }

    /// The session handle this controller was created for.
    pub fn session(&self) -> AudioSessionId {
        self.session
    }

    /// True while an enabled effect is attached.
    pub fn is_active(&self) -> bool {
        self.state == EffectState::Active
    }

    /// The gain currently applied to the backend, if an effect exists.
    pub fn current_gain(&self) -> Option<GainDb> {
        self.effect.as_ref().map(|effect| effect.target_gain())
    }

    /// Initializes (or re-initializes) the boost effect.
    ///
    /// Accepted from every state. On failure the controller keeps its
    /// previous state and effect — there is no partial Active transition.
    /// On success any previous effect is released and replaced.
    pub fn init(&mut self) -> Result<()> {
        let mut effect = self.backend.create(self.session).map_err(Error::Init)?;
        effect.set_enabled(true).map_err(Error::Init)?;

        // Swap only once the new effect is fully up.
        if let Some(mut stale) = self.effect.replace(effect)
            && let Err(err) = stale.release()
        {
            tracing::warn!(
                backend = self.backend.name(),
                error = %err,
                "stale effect teardown failed"
            );
        }
        self.state = EffectState::Active;
        tracing::info!(
            backend = self.backend.name(),
            session = self.session.raw(),
            "boost effect active"
        );
        Ok(())
    }

    /// Applies a boost multiplier through the canonical curve.
    ///
    /// Outside [`EffectState::Active`] there is no effect to drive, and the
    /// call is a harmless no-op success — the UI may slide the control
    /// before initializing without triggering errors. Backend failure is
    /// surfaced as [`Error::Boost`] with state unchanged.
    pub fn set_boost(&mut self, multiplier: f32) -> Result<()> {
        let Some(effect) = self.effect.as_mut() else {
            tracing::debug!(state = ?self.state, multiplier, "set_boost ignored: no effect");
            return Ok(());
        };

        let gain = boost_curve(BoostMultiplier::new(multiplier));
        effect.set_gain(gain).map_err(Error::Boost)?;
        tracing::debug!(multiplier, db = gain.db(), "boost applied");
        Ok(())
    }

    /// Releases the effect and its platform resources.
    ///
    /// Accepted from every state and idempotent: releasing with no effect
    /// present is a success. The reference is cleared and the state becomes
    /// [`EffectState::Released`] even when backend teardown reports an
    /// error — no half-state survives.
    pub fn release(&mut self) -> Result<()> {
        self.state = EffectState::Released;
        if let Some(mut effect) = self.effect.take() {
            effect.release().map_err(Error::Release)?;
            tracing::info!(backend = self.backend.name(), "boost effect released");
        }
        Ok(())
    }
}
