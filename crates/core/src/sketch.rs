//! The magnet drawing workflow as an explicit state machine.
//!
//! A magnet is sketched in three stages: a free-hand boundary stroke
//! (press, drag, release), then a click inside the outline for the
//! positive pole, then another for the negative pole. The machine consumes
//! abstract gesture events (it knows nothing about windows or rendering)
//! and emits a finalized [`Magnet`] once both poles are placed.
//!
//! Events that arrive in a non-matching phase are ignored rather than
//! erroring, matching a UI loop that simply has no handler wired for them.

use glam::DVec2;

use crate::magnet::{Magnet, MIN_BOUNDARY_POINTS};
use crate::polygon::Polygon;

/// Where the drawing workflow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchPhase {
    /// Nothing in progress; a press starts a new boundary stroke.
    Idle,
    /// Boundary stroke in progress; drags extend it.
    Drawing,
    /// Boundary closed; waiting for the positive-pole click.
    AwaitingPositivePole,
    /// Positive pole placed; waiting for the negative-pole click.
    AwaitingNegativePole,
}

/// What a gesture event did to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchOutcome {
    /// The event had no handler in the current phase.
    Ignored,
    /// A new boundary stroke began.
    StrokeStarted,
    /// The stroke gained a point.
    StrokeExtended,
    /// The stroke ended with too few points and was thrown away.
    StrokeDiscarded,
    /// The stroke closed into a boundary polygon; poles come next.
    BoundaryClosed,
    /// A pole click landed outside the boundary and was refused.
    PoleRejected,
    /// The positive pole was placed.
    PolePlaced,
    /// Both poles placed: the magnet is complete.
    Finalized(Magnet),
}

/// State machine driving one magnet sketch at a time.
///
/// After [`SketchOutcome::Finalized`] the machine is back in
/// [`SketchPhase::Idle`] and ready for the next magnet.
#[derive(Debug, Default)]
pub struct MagnetSketch {
    phase: Phase,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Drawing {
        stroke: Vec<DVec2>,
    },
    AwaitingPositivePole {
        boundary: Polygon,
    },
    AwaitingNegativePole {
        boundary: Polygon,
        positive_pole: DVec2,
    },
}

impl MagnetSketch {
    /// Creates an idle sketch machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current workflow phase.
    pub fn phase(&self) -> SketchPhase {
        match &self.phase {
            Phase::Idle => SketchPhase::Idle,
            Phase::Drawing { .. } => SketchPhase::Drawing,
            Phase::AwaitingPositivePole { .. } => SketchPhase::AwaitingPositivePole,
            Phase::AwaitingNegativePole { .. } => SketchPhase::AwaitingNegativePole,
        }
    }

    /// The boundary stroke drawn so far (empty outside of `Drawing`).
    pub fn stroke(&self) -> &[DVec2] {
        match &self.phase {
            Phase::Drawing { stroke } => stroke,
            _ => &[],
        }
    }

    /// Button press: starts a boundary stroke when idle.
    pub fn press(&mut self, p: DVec2) -> SketchOutcome {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Drawing { stroke: vec![p] };
                SketchOutcome::StrokeStarted
            }
            _ => SketchOutcome::Ignored,
        }
    }

    /// Drag motion: extends the stroke while drawing.
    pub fn drag(&mut self, p: DVec2) -> SketchOutcome {
        match &mut self.phase {
            Phase::Drawing { stroke } => {
                stroke.push(p);
                SketchOutcome::StrokeExtended
            }
            _ => SketchOutcome::Ignored,
        }
    }

    /// Button release: closes the boundary, or discards a stroke too short
    /// to enclose area (a degenerate outline could never accept a pole
    /// click, so keeping it would dead-end the workflow).
    pub fn release(&mut self) -> SketchOutcome {
        match std::mem::take(&mut self.phase) {
            Phase::Drawing { stroke } => {
                if stroke.len() >= MIN_BOUNDARY_POINTS {
                    self.phase = Phase::AwaitingPositivePole {
                        boundary: Polygon::new(stroke),
                    };
                    SketchOutcome::BoundaryClosed
                } else {
                    SketchOutcome::StrokeDiscarded
                }
            }
            other => {
                self.phase = other;
                SketchOutcome::Ignored
            }
        }
    }

    /// Pole-placement click. Accepted only inside the drawn boundary; the
    /// second accepted click finalizes the magnet and resets to idle.
    pub fn click(&mut self, p: DVec2) -> SketchOutcome {
        match std::mem::take(&mut self.phase) {
            Phase::AwaitingPositivePole { boundary } => {
                if boundary.contains(p) {
                    self.phase = Phase::AwaitingNegativePole {
                        boundary,
                        positive_pole: p,
                    };
                    SketchOutcome::PolePlaced
                } else {
                    self.phase = Phase::AwaitingPositivePole { boundary };
                    SketchOutcome::PoleRejected
                }
            }
            Phase::AwaitingNegativePole {
                boundary,
                positive_pole,
            } => {
                if boundary.contains(p) {
                    let magnet = Magnet::new(boundary.into_vertices(), positive_pole, p);
                    SketchOutcome::Finalized(magnet)
                } else {
                    self.phase = Phase::AwaitingNegativePole {
                        boundary,
                        positive_pole,
                    };
                    SketchOutcome::PoleRejected
                }
            }
            other => {
                self.phase = other;
                SketchOutcome::Ignored
            }
        }
    }
}
