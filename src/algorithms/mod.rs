//! Algorithm catalogue and trace generation
//!
//! Every [`Algorithm`] maps to a pure simulator in [`sorting`] or
//! [`searching`] that returns a complete [`Trace`] for a given input. The
//! simulators never mutate their input and contain no randomness, so two runs
//! on the same input yield identical traces.
//!
//! # Step kinds emitted
//!
//! | Algorithm  | Info                     | Compare          | Swap            | Terminal          |
//! |------------|--------------------------|------------------|-----------------|-------------------|
//! | Bubble     | start                    | every pair       | every exchange  | Done              |
//! | Selection  | start, scan, new minimum | every candidate  | if min moved    | Done              |
//! | Insertion  | start, key, in place     | every shift check| if key moved    | Done              |
//! | Linear     | start                    | every index      | never           | Found / NotFound  |
//! | Binary     | start, sorted, halving   | every midpoint   | never           | Found / NotFound  |

pub mod listings;
pub mod searching;
pub mod sorting;

use crate::trace::Trace;
use clap::ValueEnum;

/// Top-level grouping shown on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Sorting => "SORTING",
            Category::Searching => "SEARCHING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Linear,
    Binary,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Linear,
        Algorithm::Binary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "BUBBLE SORT",
            Algorithm::Selection => "SELECTION SORT",
            Algorithm::Insertion => "INSERTION SORT",
            Algorithm::Linear => "LINEAR SEARCH",
            Algorithm::Binary => "BINARY SEARCH",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Compare adjacent elements and swap if in wrong order - O(n²)",
            Algorithm::Selection => {
                "Find minimum element and place it at correct position - O(n²)"
            }
            Algorithm::Insertion => {
                "Build sorted array by inserting elements one by one - O(n²)"
            }
            Algorithm::Linear => "Scan array sequentially until target is found - O(n)",
            Algorithm::Binary => {
                "Eliminate half of remaining elements with each comparison - O(log n)"
            }
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => Category::Sorting,
            Algorithm::Linear | Algorithm::Binary => Category::Searching,
        }
    }

    /// Whether a target value is part of the input
    pub fn needs_target(self) -> bool {
        self.category() == Category::Searching
    }

    /// Reference C++ implementation shown in the CODE view
    pub fn listing(self) -> &'static str {
        match self {
            Algorithm::Bubble => listings::BUBBLE_SORT,
            Algorithm::Selection => listings::SELECTION_SORT,
            Algorithm::Insertion => listings::INSERTION_SORT,
            Algorithm::Linear => listings::LINEAR_SEARCH,
            Algorithm::Binary => listings::BINARY_SEARCH,
        }
    }

    /// Run the simulator for this algorithm.
    ///
    /// `target` is ignored by sorting algorithms. A searching algorithm called
    /// without a target returns `None`.
    pub fn simulate(self, input: &[i64], target: Option<i64>) -> Option<Trace> {
        let trace = match self {
            Algorithm::Bubble => sorting::bubble_sort(input),
            Algorithm::Selection => sorting::selection_sort(input),
            Algorithm::Insertion => sorting::insertion_sort(input),
            Algorithm::Linear => searching::linear_search(input, target?),
            Algorithm::Binary => searching::binary_search(input, target?),
        };
        tracing::debug!(
            algorithm = self.name(),
            input_len = input.len(),
            steps = trace.len(),
            "simulated trace"
        );
        Some(trace)
    }
}
