//! Replay engine over a pre-computed [`Trace`]
//!
//! [`Replay`] owns the raw input text, the selected [`Algorithm`] and, once
//! requested, the trace produced for that input. A cursor marks the next step
//! to reveal; everything the UI shows (the visible log, the displayed array,
//! the highlighted bars) is derived from `trace[..cursor]`.
//!
//! # Controls
//!
//! - [`Replay::step`] reveals one step, computing the trace first if needed
//! - [`Replay::start`] / [`Replay::tick`] drive auto-play at a fixed interval
//! - [`Replay::reset`] drops the trace and re-reads the input text
//! - [`Replay::step_back`] and [`Replay::jump_to_end`] move the cursor freely
//!
//! Auto-play is cooperative: the UI loop calls [`Replay::tick`] with the
//! current time and the engine decides whether the interval has elapsed.
//! Stopping the timer is clearing the running flag.

pub mod errors;

pub use errors::ReplayError;

use crate::algorithms::Algorithm;
use crate::parser::input::{parse_array, parse_target};
use crate::trace::{count_kinds, Step, StepKind, Trace};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a successful [`Replay::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A step of this kind was revealed
    Advanced(StepKind),
    /// The cursor was already at the end; running has been cleared
    Exhausted,
}

#[derive(Debug)]
pub struct Replay {
    algorithm: Algorithm,
    array_input: String,
    target_input: String,

    /// Array parsed from `array_input` at the last reset
    initial: Vec<i64>,
    trace: Option<Trace>,
    /// Next step to reveal, `0..=trace.len()`
    cursor: usize,

    running: bool,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Replay {
    pub fn new(
        algorithm: Algorithm,
        array_input: impl Into<String>,
        target_input: impl Into<String>,
        interval: Duration,
    ) -> Self {
        let mut replay = Replay {
            algorithm,
            array_input: array_input.into(),
            target_input: target_input.into(),
            initial: Vec::new(),
            trace: None,
            cursor: 0,
            running: false,
            interval,
            last_tick: None,
        };
        replay.reset();
        replay
    }

    /// Drop the trace, rewind the cursor, stop auto-play and re-read the input
    pub fn reset(&mut self) {
        self.initial = parse_array(&self.array_input);
        self.trace = None;
        self.cursor = 0;
        self.running = false;
        self.last_tick = None;
        tracing::debug!(
            algorithm = self.algorithm.name(),
            len = self.initial.len(),
            "replay reset"
        );
    }

    /// Build the trace for the current input if it does not exist yet
    pub fn ensure_trace(&mut self) -> Result<&Trace, ReplayError> {
        let trace = match self.trace.take() {
            Some(trace) => trace,
            None => self.build_trace()?,
        };
        Ok(self.trace.insert(trace))
    }

    fn build_trace(&self) -> Result<Trace, ReplayError> {
        let array = parse_array(&self.array_input);
        let target = parse_target(&self.target_input);
        let trace = self.algorithm.simulate(&array, target).ok_or_else(|| {
            tracing::warn!(target_input = %self.target_input, "target is not a number");
            ReplayError::InvalidTarget {
                input: self.target_input.trim().to_string(),
            }
        })?;
        tracing::info!(
            algorithm = self.algorithm.name(),
            steps = trace.len(),
            "generated trace"
        );
        Ok(trace)
    }

    /// Reveal the step at the cursor and advance.
    ///
    /// At the end of the trace nothing is revealed, auto-play stops and
    /// [`StepOutcome::Exhausted`] is returned.
    pub fn step(&mut self) -> Result<StepOutcome, ReplayError> {
        let cursor = self.cursor;
        let kind = self.ensure_trace()?.get(cursor).map(|step| step.kind);

        match kind {
            Some(kind) => {
                self.cursor += 1;
                if self.is_finished() {
                    self.running = false;
                }
                Ok(StepOutcome::Advanced(kind))
            }
            None => {
                self.running = false;
                Ok(StepOutcome::Exhausted)
            }
        }
    }

    /// Hide the most recently revealed step
    pub fn step_back(&mut self) -> Result<(), ReplayError> {
        if self.cursor == 0 {
            return Err(ReplayError::AtStart);
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Reveal every remaining step at once
    pub fn jump_to_end(&mut self) -> Result<(), ReplayError> {
        let len = self.ensure_trace()?.len();
        self.cursor = len;
        self.running = false;
        Ok(())
    }

    /// Begin auto-play; the first [`tick`](Self::tick) advances immediately
    pub fn start(&mut self) -> Result<(), ReplayError> {
        self.ensure_trace()?;
        self.running = !self.is_finished();
        self.last_tick = None;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when idle, pause when running
    pub fn toggle_play(&mut self) -> Result<bool, ReplayError> {
        if self.running {
            self.pause();
        } else {
            self.start()?;
        }
        Ok(self.running)
    }

    /// Advance one step if running and the interval has elapsed since the last one
    pub fn tick(&mut self, now: Instant) -> Option<Result<StepOutcome, ReplayError>> {
        if !self.running {
            return None;
        }
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_tick = Some(now);
        let outcome = self.step();
        if outcome.is_err() {
            self.running = false;
        }
        Some(outcome)
    }

    // ========== Input ==========

    pub fn set_array_input(&mut self, text: impl Into<String>) {
        self.array_input = text.into();
        self.reset();
    }

    pub fn set_target_input(&mut self, text: impl Into<String>) {
        self.target_input = text.into();
        self.reset();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.reset();
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    // ========== Getters for UI ==========

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn array_input(&self) -> &str {
        &self.array_input
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Trace length, `None` until a trace has been generated
    pub fn total_steps(&self) -> Option<usize> {
        self.trace.as_ref().map(Trace::len)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once every step of an existing trace has been revealed
    pub fn is_finished(&self) -> bool {
        self.trace
            .as_ref()
            .is_some_and(|trace| self.cursor >= trace.len())
    }

    /// Steps revealed so far, oldest first
    pub fn visible_log(&self) -> &[Step] {
        match &self.trace {
            Some(trace) => &trace.steps()[..self.cursor],
            None => &[],
        }
    }

    /// Most recently revealed step
    pub fn current_step(&self) -> Option<&Step> {
        self.visible_log().last()
    }

    /// Array as of the latest revealed snapshot, or the parsed input before any step
    pub fn current_array(&self) -> &[i64] {
        self.visible_log()
            .iter()
            .rev()
            .find_map(|step| step.snapshot.as_deref())
            .unwrap_or(&self.initial)
    }

    /// Per-kind tallies of the revealed steps
    pub fn revealed_counts(&self) -> FxHashMap<StepKind, usize> {
        count_kinds(self.visible_log())
    }
}
