//! Pluggable audio-effect backend abstraction.
//!
//! This module defines the capability interface the boost lifecycle needs
//! from a platform audio API, decoupling [`BoostController`] from any
//! concrete effect object. Two implementations ship in this crate, and a
//! host may inject its own:
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │         BoostController          │
//! └──────────────┬───────────────────┘
//!                │ uses EffectBackend / BoostEffect
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌───────────────┐ ┌───────────────┐
//! │SessionEnhancer│ │ GraphBackend  │
//! │ (millibels)   │ │ (node chain)  │
//! └───────────────┘ └───────────────┘
//! ```
//!
//! Both traits are object-safe and `Send`, enabling runtime backend
//! selection via `Box<dyn EffectBackend>` — the same shape the host uses
//! to swap a deterministic mock in for tests.
//!
//! [`BoostController`]: crate::BoostController

use crate::{AudioSessionId, BackendError};
use fuerte_core::GainDb;

/// A live boost effect attached to one audio session.
///
/// Instances are created by an [`EffectBackend`] and owned exclusively by
/// the controller. All calls are fast, synchronous control-plane
/// operations — never data-plane audio processing.
pub trait BoostEffect: Send {
    /// Enables or disables the effect. A disabled effect leaves the signal
    /// unmodified.
    fn set_enabled(&mut self, enabled: bool) -> std::result::Result<(), BackendError>;

    /// Applies a new target gain.
    ///
    /// Must be idempotent: applying the same gain twice leaves the same
    /// observable amplification both times.
    fn set_gain(&mut self, gain: GainDb) -> std::result::Result<(), BackendError>;

    /// The most recently applied target gain.
    fn target_gain(&self) -> GainDb;

    /// Releases the underlying platform resources.
    ///
    /// After a successful release, further control calls fail with
    /// [`BackendError::Released`] (or the backend's equivalent).
    fn release(&mut self) -> std::result::Result<(), BackendError>;
}

/// Factory for boost effects — one implementation per platform audio API.
pub trait EffectBackend: Send {
    /// Human-readable backend name (e.g., "enhancer", "graph", "mock").
    fn name(&self) -> &str;

    /// Constructs an effect instance attached to `session`.
    ///
    /// The effect starts disabled with unity gain; the caller is expected
    /// to enable it before use.
    fn create(
        &self,
        session: AudioSessionId,
    ) -> std::result::Result<Box<dyn BoostEffect>, BackendError>;
}
