//! The four-phase signal table.

use super::timing::Timing;
use crate::core::{LightState, State};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One step of the fixed signal cycle.
///
/// | Phase | axis A | axis B | hold   |
/// |-------|--------|--------|--------|
/// | 1     | GREEN  | RED    | green  |
/// | 2     | YELLOW | RED    | yellow |
/// | 3     | RED    | GREEN  | green  |
/// | 4     | RED    | YELLOW | yellow |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AxisAGo,
    AxisAClearing,
    AxisBGo,
    AxisBClearing,
}

impl Phase {
    /// Phases in cycle order.
    pub const ALL: [Phase; 4] = [
        Phase::AxisAGo,
        Phase::AxisAClearing,
        Phase::AxisBGo,
        Phase::AxisBClearing,
    ];

    pub fn first() -> Self {
        Phase::AxisAGo
    }

    /// The phase that follows this one, wrapping after phase 4.
    pub fn next(&self) -> Self {
        match self {
            Self::AxisAGo => Self::AxisAClearing,
            Self::AxisAClearing => Self::AxisBGo,
            Self::AxisBGo => Self::AxisBClearing,
            Self::AxisBClearing => Self::AxisAGo,
        }
    }

    /// 1-based position in the cycle.
    pub fn index(&self) -> u8 {
        match self {
            Self::AxisAGo => 1,
            Self::AxisAClearing => 2,
            Self::AxisBGo => 3,
            Self::AxisBClearing => 4,
        }
    }

    /// Light states for axis A and axis B while this phase holds.
    pub fn signals(&self) -> Status {
        let (axis_a, axis_b) = match self {
            Self::AxisAGo => (LightState::Green, LightState::Red),
            Self::AxisAClearing => (LightState::Yellow, LightState::Red),
            Self::AxisBGo => (LightState::Red, LightState::Green),
            Self::AxisBClearing => (LightState::Red, LightState::Yellow),
        };
        Status { axis_a, axis_b }
    }

    /// How long this phase holds under `timing`.
    pub fn hold(&self, timing: &Timing) -> Duration {
        match self {
            Self::AxisAGo | Self::AxisBGo => timing.green(),
            Self::AxisAClearing | Self::AxisBClearing => timing.yellow(),
        }
    }

    /// The axis that may move (green or yellow) while this phase holds.
    pub fn right_of_way(&self) -> Axis {
        match self {
            Self::AxisAGo | Self::AxisAClearing => Axis::A,
            Self::AxisBGo | Self::AxisBClearing => Axis::B,
        }
    }
}

/// One of the two crossing directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Axis {
    A,
    B,
}

impl Axis {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::AxisAGo => "AxisAGo",
            Self::AxisAClearing => "AxisAClearing",
            Self::AxisBGo => "AxisBGo",
            Self::AxisBClearing => "AxisBClearing",
        }
    }
}

/// Snapshot of both axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Status {
    pub axis_a: LightState,
    pub axis_b: LightState,
}

impl Status {
    /// Exactly one axis permits traffic and the other is red.
    pub fn is_exclusive(&self) -> bool {
        self.axis_a.permits_traffic() != self.axis_b.permits_traffic()
    }

    /// At most one axis permits traffic. Holds between the two light sets
    /// of a phase change as well as once both are set.
    pub fn is_safe(&self) -> bool {
        !(self.axis_a.permits_traffic() && self.axis_b.permits_traffic())
    }

    pub fn as_pair(&self) -> (LightState, LightState) {
        (self.axis_a, self.axis_b)
    }
}

/// One light being set during a phase change.
///
/// Both lights are set on every phase, so `from` may equal `to`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LightChange {
    pub light: String,
    pub from: LightState,
    pub to: LightState,
}

impl LightChange {
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Record of entering a phase.
///
/// Emitted after both lights are set and before any hold begins; the
/// caller decides how to honour `hold`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseEvent {
    /// 1-based cycle number
    pub cycle: u64,
    pub phase: Phase,
    pub axis_a: LightChange,
    pub axis_b: LightChange,
    pub hold: Duration,
}

impl PhaseEvent {
    pub fn index(&self) -> u8 {
        self.phase.index()
    }

    pub fn status(&self) -> Status {
        Status {
            axis_a: self.axis_a.to,
            axis_b: self.axis_b.to,
        }
    }

    pub fn change(&self, axis: Axis) -> &LightChange {
        match axis {
            Axis::A => &self.axis_a,
            Axis::B => &self.axis_b,
        }
    }

    /// Both light changes in the order they were applied: the axis without
    /// right-of-way goes red first, then the other is released.
    pub fn lights(&self) -> [&LightChange; 2] {
        let go = self.phase.right_of_way();
        [self.change(go.other()), self.change(go)]
    }
}
