//! End-to-end scenarios through the controller and driver.

use chrono::TimeDelta;
use std::time::Duration;
use stoplight::core::LightState;
use stoplight::display::MemoryDisplay;
use stoplight::driver::{CycleLimit, InstantClock, Runner, ShutdownSignal};
use stoplight::intersection::{Axis, Intersection, Phase};

fn classic() -> Intersection {
    Intersection::new(
        "North-South",
        "East-West",
        TimeDelta::seconds(10),
        TimeDelta::seconds(3),
    )
    .unwrap()
}

#[test]
fn three_cycles_produce_twelve_ordered_transitions() {
    let mut intersection = classic();

    let events: Vec<_> = (0..3).flat_map(|_| intersection.run_cycle()).collect();

    assert_eq!(events.len(), 12);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.phase, Phase::ALL[i % 4]);
        assert_eq!(event.cycle, (i / 4) as u64 + 1);
    }
    assert_eq!(
        events[5].status().as_pair(),
        (LightState::Red, LightState::Green)
    );
}

#[test]
fn step_wise_and_cycle_wise_agree() {
    let mut stepped = classic();
    let mut cycled = classic();

    let by_step: Vec<_> = (0..8).map(|_| stepped.advance()).collect();
    let by_cycle: Vec<_> = (0..2).flat_map(|_| cycled.run_cycle()).collect();

    assert_eq!(by_step, by_cycle);
}

#[tokio::test]
async fn driver_reports_every_light_set() {
    let clock = InstantClock::new();
    let display = MemoryDisplay::new();
    let mut runner = Runner::new(classic(), clock.clone(), display.clone());

    let report = runner
        .run(CycleLimit::Bounded(3), ShutdownSignal::never())
        .await
        .unwrap();

    assert_eq!(report.cycles_completed, 3);

    let events = display.events();
    assert_eq!(events.len(), 12);
    assert_eq!(
        events[5].status().as_pair(),
        (LightState::Red, LightState::Green)
    );

    // Both lights are set on every phase
    let changes = display.changes();
    assert_eq!(changes.len(), 24);
    for (pair, event) in changes.chunks(2).zip(&events) {
        let first = if event.phase.right_of_way() == Axis::A {
            "East-West"
        } else {
            "North-South"
        };
        assert_eq!(pair[0].light, first);
        assert_ne!(pair[1].light, first);
    }

    let real_changes = changes.iter().filter(|c| c.is_change()).count();
    // Four in the first cycle, whose phase 1 only re-asserts the starting
    // lights, then six in each later cycle
    assert_eq!(real_changes, 16);

    assert_eq!(clock.elapsed(), Duration::from_secs(78));
}
