//! Effect lifecycle layer for the fuerte volume boost capability.
//!
//! This crate provides:
//!
//! - **Capability traits**: [`EffectBackend`] and [`BoostEffect`] decouple
//!   the lifecycle from any concrete platform audio API
//! - **Backend variants**: [`SessionEnhancer`] (session-attached enhancer,
//!   integer millibels) and [`GraphBackend`] (node chain with explicit
//!   start/stop, dB floats)
//! - **Lifecycle**: [`BoostController`], the state machine that validates
//!   every call before delegating to the backend
//!
//! ## Quick Start
//!
//! ```rust
//! use fuerte_effect::{AudioSessionId, BoostController, SessionEnhancer};
//!
//! let mut controller = BoostController::new(
//!     Box::new(SessionEnhancer::new()),
//!     AudioSessionId::GLOBAL_MIX,
//! );
//!
//! controller.init()?;
//! controller.set_boost(2.0)?; // +6 dB on the backend
//! controller.release()?;
//! # Ok::<(), fuerte_effect::Error>(())
//! ```

mod backend;
mod controller;
mod enhancer;
mod graph;
mod session;

pub use backend::{BoostEffect, EffectBackend};
pub use controller::{BoostController, EffectState};
pub use enhancer::{EnhancerEffect, SessionEnhancer};
pub use graph::{GraphBackend, GraphChainEffect};
pub use session::AudioSessionId;

/// Failures reported by a backend implementation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend cannot attach to the given session.
    #[error("invalid audio session {0}")]
    InvalidSession(AudioSessionId),

    /// The effect's platform resources have already been released.
    #[error("effect has been released")]
    Released,

    /// The audio graph backing the effect is not running.
    #[error("audio graph is not running")]
    GraphStopped,

    /// Any other backend-specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors surfaced at the controller boundary.
///
/// Each variant maps one lifecycle operation; the inner [`BackendError`]
/// carries the backend's own diagnosis. None of these are fatal — the
/// caller may simply retry the whole request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backend effect construction or enable failed. The controller keeps
    /// its previous state and effect.
    #[error("boost initialization failed: {0}")]
    Init(#[source] BackendError),

    /// Applying a gain value to the backend failed. Controller state is
    /// unchanged.
    #[error("boost setting failed: {0}")]
    Boost(#[source] BackendError),

    /// Backend resource teardown failed. The effect reference is already
    /// cleared when this is returned.
    #[error("boost release failed: {0}")]
    Release(#[source] BackendError),
}

/// Convenience result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;
