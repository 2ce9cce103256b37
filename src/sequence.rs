//! Timed phase sequencing for a scene.
//!
//! A scene's reveal/hide choreography is a [`Script`]: the full list of phase
//! flips with offsets from a single sequence-start timestamp, computed up
//! front rather than chained timer-to-timer. The [`Sequencer`] owns the
//! clock bookkeeping: it captures the start instant when a trigger fires,
//! reports due steps on `poll`, and makes teardown a single cancel of
//! everything pending. A poll after cancellation mutates nothing.
//!
//! Polling is jitter tolerant: steps with different offsets fire in offset
//! order, and a late poll fires every step that became due, so later phases
//! never depend on sub-frame timing precision.

use crate::{
    core::Millis,
    error::{OrreryError, OrreryResult},
};

/// One phase flip at a fixed offset from sequence start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step<P> {
    pub at: Millis,
    pub phase: P,
}

/// An ordered schedule of phase flips, validated to be non-decreasing in time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Script<P> {
    steps: Vec<Step<P>>,
}

impl<P> Script<P> {
    pub fn new(steps: Vec<Step<P>>) -> OrreryResult<Self> {
        if !steps.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(OrreryError::sequence(
                "script steps must be ordered by offset",
            ));
        }
        Ok(Self { steps })
    }

    /// Literal scripts whose ordering is known at the call site.
    pub(crate) fn from_sorted(steps: Vec<Step<P>>) -> Self {
        debug_assert!(steps.windows(2).all(|w| w[0].at <= w[1].at));
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<P>] {
        &self.steps
    }

    /// Offset of the last step; `Millis(0)` for an empty script.
    pub fn total(&self) -> Millis {
        self.steps.last().map_or(Millis(0), |s| s.at)
    }
}

/// Direction of the run currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Running(Direction),
    Settled,
}

/// Per-scene state machine driving ordered, timed phase flips.
///
/// Forward (`open`) and reverse (`close`) runs use independent scripts with
/// matching but reversed roles. Triggers that do not apply to the current
/// state are ignored rather than erroring; the sequencer is not designed for
/// concurrent runs.
#[derive(Clone, Debug)]
pub struct Sequencer<P> {
    forward: Script<P>,
    reverse: Script<P>,
    state: State,
    start: Millis,
    next_step: usize,
    phase: P,
}

impl<P: Copy + PartialEq> Sequencer<P> {
    /// Create a sequencer resting at `idle_phase`.
    pub fn new(idle_phase: P, forward: Script<P>, reverse: Script<P>) -> Self {
        Self {
            forward,
            reverse,
            state: State::Idle,
            start: Millis(0),
            next_step: 0,
            phase: idle_phase,
        }
    }

    /// Phase most recently committed by a fired step.
    pub fn phase(&self) -> P {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    pub fn is_settled(&self) -> bool {
        self.state == State::Settled
    }

    /// Direction of the run in flight, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            State::Running(d) => Some(d),
            _ => None,
        }
    }

    /// Begin the forward sequence. Ignored unless idle (busy guard).
    pub fn open(&mut self, now: Millis) {
        if self.state != State::Idle {
            return;
        }
        self.state = State::Running(Direction::Forward);
        self.start = now;
        self.next_step = 0;
    }

    /// Begin the reverse sequence, cancelling any pending forward steps.
    ///
    /// Ignored while idle or already reversing.
    pub fn close(&mut self, now: Millis) {
        match self.state {
            State::Running(Direction::Forward) | State::Settled => {
                self.state = State::Running(Direction::Reverse);
                self.start = now;
                self.next_step = 0;
            }
            State::Idle | State::Running(Direction::Reverse) => {}
        }
    }

    /// Drop every pending step. Subsequent polls fire nothing.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
        self.next_step = 0;
    }

    /// Fire all steps due at `now`, in offset order, and return their phases.
    ///
    /// After the last forward step the sequencer is settled; after the last
    /// reverse step it is idle again.
    pub fn poll(&mut self, now: Millis) -> Vec<P> {
        let direction = match self.state {
            State::Running(d) => d,
            State::Idle | State::Settled => return Vec::new(),
        };

        let script = match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        };

        let elapsed = now.since(self.start);
        let mut fired = Vec::new();
        while let Some(step) = script.steps().get(self.next_step) {
            if step.at > elapsed {
                break;
            }
            fired.push(step.phase);
            self.next_step += 1;
        }

        if let Some(&phase) = fired.last() {
            self.phase = phase;
        }

        if self.next_step >= script.steps().len() {
            self.state = match direction {
                Direction::Forward => State::Settled,
                Direction::Reverse => State::Idle,
            };
            self.next_step = 0;
        }

        fired
    }
}
