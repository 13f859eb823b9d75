//! Print the canonical boost curve.

use clap::Args;
use fuerte_core::{BoostMultiplier, boost_curve};

#[derive(Args)]
pub struct CurveArgs {
    /// Map a single multiplier instead of sweeping the domain
    #[arg(long)]
    multiplier: Option<f32>,

    /// Sweep step across the 1.0-4.0 domain
    #[arg(long, default_value = "0.25")]
    step: f32,
}

pub fn run(args: CurveArgs) -> anyhow::Result<()> {
    println!(
        "{:>10}  {:>8}  {:>9}  {:>7}",
        "multiplier", "gain", "millibels", "linear"
    );

    match args.multiplier {
        Some(multiplier) => print_row(multiplier),
        None => {
            anyhow::ensure!(args.step > 0.0, "step must be positive");
            let mut multiplier = BoostMultiplier::MIN.get();
            while multiplier <= BoostMultiplier::MAX.get() + 1e-6 {
                print_row(multiplier);
                multiplier += args.step;
            }
        }
    }
    Ok(())
}

fn print_row(multiplier: f32) {
    let gain = boost_curve(BoostMultiplier::new(multiplier));
    println!(
        "{:>10.2}  {:>8.2}  {:>9}  {:>7.3}",
        multiplier,
        gain.db(),
        gain.to_millibels().get(),
        gain.to_linear()
    );
}
