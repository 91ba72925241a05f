//! Output sinks for phase changes.
//!
//! Presentation lives here and only here: the decorated light labels, the
//! console layout and the machine-readable formats.

use crate::core::{LightState, State};
use crate::effects::PhaseObserver;
use crate::intersection::{LightChange, Phase, PhaseEvent};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

const RULE_WIDTH: usize = 30;

/// Decorated label for a light state.
pub fn label(state: LightState) -> &'static str {
    match state {
        LightState::Red => "🔴 RED",
        LightState::Yellow => "🟡 YELLOW",
        LightState::Green => "🟢 GREEN",
    }
}

/// One-line description of what traffic is doing during a phase.
pub fn headline(event: &PhaseEvent) -> String {
    let a = &event.axis_a.light;
    let b = &event.axis_b.light;
    match event.phase {
        Phase::AxisAGo => format!("Traffic flowing on {a}"),
        Phase::AxisAClearing => format!("{a} preparing to stop"),
        Phase::AxisBGo => format!("Traffic stops on {a}, starts on {b}"),
        Phase::AxisBClearing => format!("{b} preparing to stop"),
    }
}

/// Human-readable console output on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn run_started(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "--- Starting Traffic Management System Simulation ---")
    }

    pub fn run_finished(&self, cancelled: bool) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if cancelled {
            writeln!(out, "\n--- Simulation Stopped ---")
        } else {
            writeln!(out, "\n--- Simulation Complete ---")
        }
    }
}

impl PhaseObserver for ConsoleDisplay {
    fn phase_starting(&self, event: &PhaseEvent) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "\n--- PHASE {}: {} ---", event.index(), headline(event))
    }

    fn light_changed(&self, change: &LightChange) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "🚦 {} Light is now: {}", change.light, label(change.to))
    }

    fn phase_entered(&self, event: &PhaseEvent) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "🚥 Current Intersection Status:")?;
        for light in [&event.axis_a, &event.axis_b] {
            writeln!(out, "  Light({}, State: {})", light.light, label(light.to))?;
        }
        writeln!(out, "{rule}")
    }

    fn cycle_started(&self, cycle: u64) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "\n================ CYCLE {cycle} ===================")
    }
}

/// Structured `tracing` events only; nothing on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDisplay;

impl PhaseObserver for LogDisplay {
    fn light_changed(&self, change: &LightChange) -> io::Result<()> {
        if change.is_change() {
            tracing::info!(light = %change.light, from = change.from.name(), to = change.to.name(), "light changed");
        }
        Ok(())
    }

    fn phase_entered(&self, event: &PhaseEvent) -> io::Result<()> {
        tracing::info!(
            cycle = event.cycle,
            phase = event.index(),
            axis_a = event.axis_a.to.name(),
            axis_b = event.axis_b.to.name(),
            hold_ms = event.hold.as_millis() as u64,
            "{}",
            headline(event)
        );
        Ok(())
    }

    fn cycle_started(&self, cycle: u64) -> io::Result<()> {
        tracing::info!(cycle, "cycle started");
        Ok(())
    }
}

/// One JSON object per phase on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonLinesDisplay;

impl PhaseObserver for JsonLinesDisplay {
    fn phase_entered(&self, event: &PhaseEvent) -> io::Result<()> {
        let line = serde_json::to_string(event)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// In-memory sink that keeps everything it is told.
///
/// Clones share the same storage, so a copy handed to a runner can be
/// inspected afterwards.
#[derive(Clone, Debug, Default)]
pub struct MemoryDisplay {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    changes: Vec<LightChange>,
    events: Vec<PhaseEvent>,
    started: Vec<u64>,
    finished: Vec<u64>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn changes(&self) -> Vec<LightChange> {
        self.recorded().changes.clone()
    }

    pub fn events(&self) -> Vec<PhaseEvent> {
        self.recorded().events.clone()
    }

    pub fn cycles_started(&self) -> Vec<u64> {
        self.recorded().started.clone()
    }

    pub fn cycles_finished(&self) -> Vec<u64> {
        self.recorded().finished.clone()
    }
}

impl PhaseObserver for MemoryDisplay {
    fn light_changed(&self, change: &LightChange) -> io::Result<()> {
        self.recorded().changes.push(change.clone());
        Ok(())
    }

    fn phase_entered(&self, event: &PhaseEvent) -> io::Result<()> {
        self.recorded().events.push(event.clone());
        Ok(())
    }

    fn cycle_started(&self, cycle: u64) -> io::Result<()> {
        self.recorded().started.push(cycle);
        Ok(())
    }

    fn cycle_finished(&self, cycle: u64) -> io::Result<()> {
        self.recorded().finished.push(cycle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersection::IntersectionBuilder;

    #[test]
    fn labels_are_decorated() {
        assert_eq!(label(LightState::Red), "🔴 RED");
        assert_eq!(label(LightState::Yellow), "🟡 YELLOW");
        assert_eq!(label(LightState::Green), "🟢 GREEN");
    }

    #[test]
    fn headlines_name_the_axes() {
        let mut intersection = IntersectionBuilder::new().axes("Main", "Cross").build().unwrap();

        let headlines: Vec<String> = intersection.run_cycle().iter().map(headline).collect();

        assert_eq!(
            headlines,
            vec![
                "Traffic flowing on Main",
                "Main preparing to stop",
                "Traffic stops on Main, starts on Cross",
                "Cross preparing to stop",
            ]
        );
    }

    #[test]
    fn memory_display_clones_share_storage() {
        let display = MemoryDisplay::new();
        let copy = display.clone();

        copy.cycle_started(1).unwrap();
        copy.cycle_finished(1).unwrap();

        assert_eq!(display.cycles_started(), vec![1]);
        assert_eq!(display.cycles_finished(), vec![1]);
    }

    #[test]
    fn phase_events_serialize_as_json_lines() {
        let mut intersection = IntersectionBuilder::new().build().unwrap();
        let event = intersection.advance();

        let line = serde_json::to_string(&event).unwrap();

        assert!(!line.contains('\n'));
        assert!(line.contains("\"phase\":\"axis_a_go\""));
        assert!(line.contains("\"to\":\"GREEN\""));

        let back: PhaseEvent = serde_json::from_str(&line).unwrap();
        assert_eq!(back, event);
    }
}
