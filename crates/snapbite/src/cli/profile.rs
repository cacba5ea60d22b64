//! The `snapbite profile` command: BMI and calorie target without a photo.

use clap::Args;
use snapbite_core::{profile, Goal};
use std::str::FromStr;

/// Arguments for the `profile` command.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Height in centimeters
    #[arg(long)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// Dietary goal: cut, maintain or bulk
    #[arg(long)]
    pub goal: String,
}

/// Execute the profile command.
pub fn execute(args: ProfileArgs) -> anyhow::Result<()> {
    let goal = Goal::from_str(&args.goal)?;

    let bmi = profile::bmi(args.weight, args.height);
    let target = profile::daily_calorie_target(args.weight, goal);

    println!("BMI: {bmi:.2}");
    println!("Recommended daily intake ({goal}): {target:.0} kcal");
    Ok(())
}
