//! Fuerte Core - boost-to-gain mapping for the volume boost capability
//!
//! This crate is the pure heart of fuerte: given a user-facing boost
//! multiplier (1.0x = unmodified playback, 4.0x = maximum boost), it
//! produces the gain value a platform audio effect should apply. There is
//! no I/O and no platform code here — just the canonical curve and the
//! unit vocabulary shared by every backend.
//!
//! # Core Abstractions
//!
//! ## Units
//!
//! - [`BoostMultiplier`] - user-facing loudness factor, clamped to \[1.0, 4.0\]
//! - [`GainDb`] - backend gain in decibels
//! - [`GainMillibels`] - integer-scaled gain (1 dB = 1000 mB) for backends
//!   that take millibel values
//!
//! ## Mapping
//!
//! - [`boost_curve`] / [`boost_db`] - the canonical piecewise
//!   multiplier-to-gain mapping, shared by all backends
//! - [`SEGMENTS`] - the breakpoint table the mapping evaluates
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fuerte-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fuerte_core::{BoostMultiplier, boost_curve};
//!
//! // Doubling perceived volume maps to +6 dB.
//! let gain = boost_curve(BoostMultiplier::new(2.0));
//! assert_eq!(gain.db(), 6.0);
//! assert_eq!(gain.to_millibels().get(), 6000);
//! ```
//!
//! # Design Principles
//!
//! - **Pure and deterministic**: identical input always yields identical
//!   output; callers may re-apply values freely
//! - **Clamp, never reject**: out-of-range multipliers (and NaN) are folded
//!   into the domain so UI interaction stays frictionless
//! - **One canonical curve**: every backend variant observes the same
//!   multiplier-to-gain relationship

#![cfg_attr(not(feature = "std"), no_std)]

pub mod curve;
pub mod units;

// Re-export main types at crate root
pub use curve::{CurveSegment, MAX_BOOST_DB, SEGMENTS, boost_curve, boost_db};
pub use units::{BoostMultiplier, GainDb, GainMillibels, MILLIBELS_PER_DB};
