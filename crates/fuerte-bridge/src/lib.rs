//! UI-to-native bridge for the fuerte volume boost capability.
//!
//! The UI layer drives boost through a three-method vocabulary —
//! `initAudioBoost`, `setAudioBoost`, `releaseAudioBoost` — originally a
//! method-channel protocol. This crate carries that contract without
//! binding it to a transport:
//!
//! - [`Request`] / [`Response`] / [`ErrorCode`] - serde wire types
//! - [`BoostChannel`] - dispatches requests onto one
//!   [`BoostController`](fuerte_effect::BoostController) behind a mutex
//!
//! ## Quick Start
//!
//! ```rust
//! use fuerte_bridge::{BoostChannel, Request, Response};
//! use fuerte_effect::{AudioSessionId, BoostController, SessionEnhancer};
//!
//! let controller = BoostController::new(
//!     Box::new(SessionEnhancer::new()),
//!     AudioSessionId::GLOBAL_MIX,
//! );
//! let channel = BoostChannel::new(controller);
//!
//! assert_eq!(channel.handle(&Request::Init), Response::ok());
//! let response = channel.handle(&Request::SetBoost { multiplier: Some(2.0) });
//! assert!(response.is_success());
//! ```

mod channel;
mod messages;

pub use channel::BoostChannel;
pub use messages::{ErrorCode, Request, Response};
