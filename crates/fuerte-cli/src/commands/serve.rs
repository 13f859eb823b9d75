//! JSON-lines request/response loop.
//!
//! Reads one serialized [`Request`] per stdin line and writes one
//! [`Response`] per stdout line — the UI message channel with the
//! transport made concrete:
//!
//! ```text
//! $ echo '{"method":"initAudioBoost"}' | fuerte serve
//! {"status":"success","value":true}
//! ```

use std::io::{self, BufRead, Write};

use clap::Args;
use fuerte_bridge::{BoostChannel, ErrorCode, Request, Response};
use fuerte_effect::{AudioSessionId, BoostController};

use crate::commands::BackendKind;

#[derive(Args)]
pub struct ServeArgs {
    /// Backend variant to serve
    #[arg(long, value_enum, default_value = "enhancer")]
    backend: BackendKind,

    /// Audio session handle (0 = global mix)
    #[arg(long, default_value = "0")]
    session: u32,
}

pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let controller = BoostController::new(
        args.backend.instantiate(),
        AudioSessionId::new(args.session),
    );
    let channel = BoostChannel::new(controller);
    tracing::info!(session = args.session, "boost channel serving on stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => channel.handle(&request),
            Err(err) => {
                Response::error(ErrorCode::InvalidArgs, format!("malformed request: {err}"))
            }
        };

        serde_json::to_writer(&mut stdout, &response)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }
    Ok(())
}
