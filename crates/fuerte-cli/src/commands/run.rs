//! Drive a full boost lifecycle against a real backend.

use clap::Args;
use fuerte_effect::{AudioSessionId, BoostController};

use crate::commands::BackendKind;

#[derive(Args)]
pub struct RunArgs {
    /// Backend variant to exercise
    #[arg(long, value_enum, default_value = "enhancer")]
    backend: BackendKind,

    /// Audio session handle (0 = global mix)
    #[arg(long, default_value = "0")]
    session: u32,

    /// Boost multipliers to apply in order
    #[arg(long = "boost", default_values_t = vec![1.0f32, 2.0, 3.5])]
    boosts: Vec<f32>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let mut controller = BoostController::new(
        args.backend.instantiate(),
        AudioSessionId::new(args.session),
    );

    controller.init()?;
    println!("boost effect active on session {}", controller.session());

    for &multiplier in &args.boosts {
        controller.set_boost(multiplier)?;
        match controller.current_gain() {
            Some(gain) => println!("boost {multiplier:.2}x -> {gain}"),
            None => println!("boost {multiplier:.2}x -> no effect attached"),
        }
    }

    controller.release()?;
    println!("boost effect released");
    Ok(())
}
