//! Wire types for the UI boost channel.
//!
//! Requests are adjacently tagged on `method`/`args`, matching the shape a
//! method-channel host produces:
//!
//! ```json
//! {"method": "setAudioBoost", "args": {"multiplier": 2.0}}
//! ```
//!
//! Responses are tagged on `status`:
//!
//! ```json
//! {"status": "success", "value": true}
//! {"status": "error", "code": "BOOST_ERROR", "message": "..."}
//! ```

use serde::{Deserialize, Serialize};

/// A request from the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "args")]
pub enum Request {
    /// Create and enable the boost effect.
    #[serde(rename = "initAudioBoost")]
    Init,

    /// Apply a boost multiplier.
    #[serde(rename = "setAudioBoost")]
    SetBoost {
        /// Desired multiplier. Missing or non-finite values fall back to
        /// 1.0 rather than erroring — the permissive host policy.
        #[serde(default)]
        multiplier: Option<f64>,
    },

    /// Release the effect and its platform resources.
    #[serde(rename = "releaseAudioBoost")]
    Release,
}

/// Error codes mirrored across platform implementations of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Backend construction or start failed.
    #[serde(rename = "INIT_ERROR")]
    InitError,

    /// Gain application failed.
    #[serde(rename = "BOOST_ERROR")]
    BoostError,

    /// Resource teardown failed.
    #[serde(rename = "RELEASE_ERROR")]
    ReleaseError,

    /// Structurally malformed request. Kept in the vocabulary for hosts
    /// that reject bad arguments instead of defaulting them.
    #[serde(rename = "INVALID_ARGS")]
    InvalidArgs,
}

/// A response to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    /// The request was carried out (or tolerated as a no-op).
    Success {
        /// Always `true`; carried for host compatibility.
        value: bool,
    },

    /// The request failed; the effect state is unchanged or documented by
    /// the operation's contract.
    Error {
        /// Machine-readable failure category.
        code: ErrorCode,
        /// Human-readable diagnosis from the backend.
        message: String,
    },
}

impl Response {
    /// The canonical success response.
    pub fn ok() -> Self {
        Response::Success { value: true }
    }

    /// Builds an error response.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Response::Error {
            code,
            message: message.into(),
        }
    }

    /// True for [`Response::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }
}
