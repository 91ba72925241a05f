//! Intersection Runner
//!
//! This example drives a two-axis intersection through a few cycles
//! without waiting in real time.
//!
//! Key concepts:
//! - Pure phase table advanced by the controller
//! - Observer environment receiving every light change
//! - `InstantClock` standing in for real holds
//!
//! Run with: cargo run --example intersection

use chrono::TimeDelta;
use stoplight::display::MemoryDisplay;
use stoplight::driver::{CycleLimit, InstantClock, Runner, ShutdownSignal};
use stoplight::intersection::IntersectionBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("=== Intersection Runner ===\n");

    let intersection = IntersectionBuilder::new()
        .axes("Main St", "1st Ave")
        .green(TimeDelta::seconds(20))
        .yellow(TimeDelta::seconds(4))
        .build()?;

    println!("Timing: red lasts {:?} per axis\n", intersection.timing().red());

    let clock = InstantClock::new();
    let display = MemoryDisplay::new();
    let mut runner = Runner::new(intersection, clock.clone(), display.clone());

    let report = runner
        .run(CycleLimit::Bounded(2), ShutdownSignal::never())
        .await?;

    for event in display.events() {
        let (a, b) = event.status().as_pair();
        println!(
            "cycle {} phase {}: {} / {} for {:?}",
            event.cycle,
            event.index(),
            a,
            b,
            event.hold
        );
    }

    println!("\nLight changes, in the order they were applied:");
    for change in display.changes().iter().filter(|c| c.is_change()) {
        println!("  {}: {} -> {}", change.light, change.from, change.to);
    }

    println!(
        "\nCompleted {} cycles ({} phases) in {:?} of virtual time",
        report.cycles_completed,
        report.phases_entered,
        clock.elapsed()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
