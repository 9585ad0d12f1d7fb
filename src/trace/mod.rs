// Step traces recorded by the algorithm simulators

use rustc_hash::FxHashMap;
use std::fmt;

/// What kind of event a [`Step`] narrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Info,
    Compare,
    Swap,
    Found,
    NotFound,
    Done,
}

impl StepKind {
    /// Terminal kinds may only appear as the last step of a trace
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Found | StepKind::NotFound | StepKind::Done)
    }

    /// Console prefix shown before the message, empty for kinds that have none
    pub fn prefix(self) -> &'static str {
        match self {
            StepKind::Info => "> INFO: ",
            StepKind::Compare => "> CMP: ",
            StepKind::Swap => "> SWAP: ",
            StepKind::Found | StepKind::NotFound | StepKind::Done => "",
        }
    }
}

/// One narrated event of a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub message: String,
    /// Array state after this event
    pub snapshot: Option<Vec<i64>>,
    /// Indices involved in this event (empty when none)
    pub highlights: Vec<usize>,
}

impl Step {
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Step {
            kind,
            message: message.into(),
            snapshot: None,
            highlights: Vec::new(),
        }
    }

    pub fn with_snapshot(mut self, array: &[i64]) -> Self {
        self.snapshot = Some(array.to_vec());
        self
    }

    pub fn with_highlights(mut self, indices: &[usize]) -> Self {
        self.highlights = indices.to_vec();
        self
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.message)
    }
}

/// A finished, immutable sequence of steps.
///
/// Always ends with exactly one terminal step; every earlier step is
/// non-terminal. The only way to obtain a `Trace` is through
/// [`TraceBuilder::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a finished trace, provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal step
    pub fn last(&self) -> &Step {
        // finish() always pushes the terminal step
        &self.steps[self.steps.len() - 1]
    }

    /// Snapshot carried by the terminal step, if any
    pub fn final_snapshot(&self) -> Option<&[i64]> {
        self.last().snapshot.as_deref()
    }

    /// Count how many steps of each kind the trace contains
    pub fn kind_counts(&self) -> FxHashMap<StepKind, usize> {
        count_kinds(&self.steps)
    }

    /// Number of steps of `kind`
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}

/// Tally step kinds over any slice of steps (e.g. the revealed prefix of a trace)
pub fn count_kinds(steps: &[Step]) -> FxHashMap<StepKind, usize> {
    let mut counts = FxHashMap::default();
    for step in steps {
        *counts.entry(step.kind).or_insert(0) += 1;
    }
    counts
}

/// Accumulates non-terminal steps until a terminal one closes the trace
#[derive(Debug, Default)]
pub struct TraceBuilder {
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        TraceBuilder { steps: Vec::new() }
    }

    /// Append an intermediate step
    pub fn push(&mut self, step: Step) {
        debug_assert!(
            !step.kind.is_terminal(),
            "terminal step {:?} pushed before finish()",
            step.kind
        );
        self.steps.push(step);
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Close the trace with its terminal step
    pub fn finish(mut self, terminal: Step) -> Trace {
        debug_assert!(
            terminal.kind.is_terminal(),
            "finish() called with non-terminal step {:?}",
            terminal.kind
        );
        self.steps.push(terminal);
        Trace { steps: self.steps }
    }
}

/// Render an array the way step messages quote it: `[1, 2, 3]`
pub fn format_array(array: &[i64]) -> String {
    let items: Vec<String> = array.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
