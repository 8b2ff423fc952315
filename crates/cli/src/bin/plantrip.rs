//! Clock and trip summary for a saved maneuver plan, the offline counterpart
//! of the editor's clock and trip windows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use precise_maneuver::store;
use precise_maneuver::time::{format_absolute, format_duration};
use precise_maneuver::units::two_decimals;

#[derive(Parser, Debug)]
#[command(about = "Print clock and trip information for a saved maneuver plan")]
struct Args {
    /// Path to the saved plan (`node = x,y,z,ut` lines).
    plan: PathBuf,

    /// Current universal time in seconds.
    #[arg(long, default_value_t = 0.0)]
    now: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let events = store::load_events(&args.plan)
        .with_context(|| format!("loading plan {}", args.plan.display()))?;
    let plan = store::restore_plan(&events, args.now);

    println!("Time: {}", format_absolute(args.now));
    println!("UT:   {}", args.now.floor());

    if plan.is_empty() {
        println!("No nodes to show.");
        return Ok(());
    }

    println!();
    println!("{:<8} {:>12}  {}", "", "dv", "Time Until");
    let mut total = 0.0;
    for (index, (_, event)) in plan.iter().enumerate() {
        let magnitude = event.delta_v.norm();
        let countdown = event.ut - args.now;
        let sign = if countdown >= 0.0 { "T-" } else { "T+" };
        println!(
            "{:<8} {:>12}  {} {}",
            format!("Node {index}"),
            format!("{}m/s", two_decimals(magnitude)),
            sign,
            format_duration(countdown)
        );
        total += magnitude;
    }
    println!("{:<8} {:>12}", "Total", format!("{}m/s", two_decimals(total)));
    Ok(())
}
