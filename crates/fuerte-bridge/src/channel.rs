//! Request dispatch onto a boost controller.

use std::sync::Mutex;

use fuerte_core::GainDb;
use fuerte_effect::{BoostController, EffectState, Error};

use crate::messages::{ErrorCode, Request, Response};

/// Multiplier used when the UI omits or mangles the argument.
const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Serializes UI requests onto one [`BoostController`].
///
/// The mutex gives the controller a single exclusive owner even when the
/// host invokes handlers from multiple threads; requests are strictly
/// sequenced, so a release can never race a gain change against a freed
/// effect. Failures never panic across the channel boundary — every
/// outcome is a [`Response`].
pub struct BoostChannel {
    controller: Mutex<BoostController>,
}

impl BoostChannel {
    /// Wraps a controller for channel dispatch.
    pub fn new(controller: BoostController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    /// Dispatches one request and reports the outcome.
    pub fn handle(&self, request: &Request) -> Response {
        let Ok(mut controller) = self.controller.lock() else {
            return Response::error(code_for(request), "boost controller lock poisoned");
        };

        match dispatch(&mut controller, request) {
            Ok(()) => Response::ok(),
            Err(err) => {
                tracing::warn!(error = %err, "boost request failed");
                Response::error(error_code(&err), err.to_string())
            }
        }
    }

    /// Current lifecycle state, for host status displays.
    pub fn state(&self) -> EffectState {
        match self.controller.lock() {
            Ok(controller) => controller.state(),
            Err(poisoned) => poisoned.into_inner().state(),
        }
    }

    /// Gain currently applied to the backend, if any.
    pub fn current_gain(&self) -> Option<GainDb> {
        match self.controller.lock() {
            Ok(controller) => controller.current_gain(),
            Err(poisoned) => poisoned.into_inner().current_gain(),
        }
    }
}

fn dispatch(controller: &mut BoostController, request: &Request) -> fuerte_effect::Result<()> {
    match request {
        Request::Init => controller.init(),
        Request::SetBoost { multiplier } => {
            controller.set_boost(effective_multiplier(*multiplier) as f32)
        }
        Request::Release => controller.release(),
    }
}

/// Applies the permissive argument policy: absent or non-finite
/// multipliers become 1.0.
fn effective_multiplier(raw: Option<f64>) -> f64 {
    match raw {
        Some(multiplier) if multiplier.is_finite() => multiplier,
        Some(_) | None => {
            tracing::debug!("multiplier missing or non-finite; defaulting to 1.0");
            DEFAULT_MULTIPLIER
        }
    }
}

/// Failure category for an operation that never ran.
fn code_for(request: &Request) -> ErrorCode {
    match request {
        Request::Init => ErrorCode::InitError,
        Request::SetBoost { .. } => ErrorCode::BoostError,
        Request::Release => ErrorCode::ReleaseError,
    }
}

fn error_code(err: &Error) -> ErrorCode {
    match err {
        Error::Init(_) => ErrorCode::InitError,
        Error::Boost(_) => ErrorCode::BoostError,
        Error::Release(_) => ErrorCode::ReleaseError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuerte_effect::{AudioSessionId, GraphBackend, SessionEnhancer};

    fn enhancer_channel() -> BoostChannel {
        BoostChannel::new(BoostController::new(
            Box::new(SessionEnhancer::new()),
            AudioSessionId::GLOBAL_MIX,
        ))
    }

    #[test]
    fn init_set_release_round_trip() {
        let channel = enhancer_channel();

        assert_eq!(channel.handle(&Request::Init), Response::ok());
        assert_eq!(channel.state(), EffectState::Active);

        let response = channel.handle(&Request::SetBoost {
            multiplier: Some(2.0),
        });
        assert!(response.is_success());
        assert_eq!(channel.current_gain().unwrap().db(), 6.0);

        assert_eq!(channel.handle(&Request::Release), Response::ok());
        assert_eq!(channel.state(), EffectState::Released);
    }

    #[test]
    fn missing_multiplier_defaults_to_unity() {
        let channel = enhancer_channel();
        channel.handle(&Request::Init);
        channel.handle(&Request::SetBoost {
            multiplier: Some(3.0),
        });

        let response = channel.handle(&Request::SetBoost { multiplier: None });
        assert!(response.is_success());
        assert_eq!(channel.current_gain().unwrap().db(), 0.0);
    }

    #[test]
    fn non_finite_multiplier_defaults_to_unity() {
        let channel = enhancer_channel();
        channel.handle(&Request::Init);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let response = channel.handle(&Request::SetBoost {
                multiplier: Some(bad),
            });
            assert!(response.is_success());
            assert_eq!(channel.current_gain().unwrap().db(), 0.0);
        }
    }

    #[test]
    fn set_before_init_is_tolerated() {
        let channel = enhancer_channel();
        let response = channel.handle(&Request::SetBoost {
            multiplier: Some(2.0),
        });
        assert!(response.is_success());
        assert_eq!(channel.state(), EffectState::Uninitialized);
        assert!(channel.current_gain().is_none());
    }

    #[test]
    fn failed_init_reports_init_error() {
        let channel = BoostChannel::new(BoostController::new(
            Box::new(GraphBackend::new()),
            AudioSessionId::new(9),
        ));

        match channel.handle(&Request::Init) {
            Response::Error { code, message } => {
                assert_eq!(code, ErrorCode::InitError);
                assert!(message.contains("invalid audio session"), "got: {message}");
            }
            Response::Success { .. } => panic!("init on session 9 must fail on the graph backend"),
        }
        assert_eq!(channel.state(), EffectState::Uninitialized);
    }

    #[test]
    fn release_is_idempotent_across_the_channel() {
        let channel = enhancer_channel();
        channel.handle(&Request::Init);

        assert_eq!(channel.handle(&Request::Release), Response::ok());
        assert_eq!(channel.handle(&Request::Release), Response::ok());
        assert_eq!(channel.state(), EffectState::Released);
    }
}
