//! Searching simulators

use crate::trace::{format_array, Step, StepKind, Trace, TraceBuilder};

/// Scan left to right, stopping at the first match
pub fn linear_search(input: &[i64], target: i64) -> Trace {
    let arr = input.to_vec();
    let mut trace = TraceBuilder::new();

    trace.push(
        Step::new(
            StepKind::Info,
            format!("Starting Linear Search for {}...", target),
        )
        .with_snapshot(&arr),
    );

    for (i, &value) in arr.iter().enumerate() {
        trace.push(
            Step::new(
                StepKind::Compare,
                format!("Checking index {}: Is {} == {}?", i, value, target),
            )
            .with_snapshot(&arr)
            .with_highlights(&[i]),
        );

        if value == target {
            return trace.finish(
                Step::new(
                    StepKind::Found,
                    format!("Found {} at index {}!", target, i),
                )
                .with_snapshot(&arr)
                .with_highlights(&[i]),
            );
        }
    }

    trace.finish(
        Step::new(StepKind::NotFound, format!("{} not found in array.", target))
            .with_snapshot(&arr),
    )
}

/// Halve the search window around the midpoint until the target is hit or
/// the window is empty.
///
/// The input does not need to be sorted: a sorted copy is searched and the
/// sort is announced as its own step.
pub fn binary_search(input: &[i64], target: i64) -> Trace {
    let mut arr = input.to_vec();
    let mut trace = TraceBuilder::new();

    trace.push(
        Step::new(
            StepKind::Info,
            format!("Starting Binary Search for {}...", target),
        )
        .with_snapshot(&arr),
    );

    if arr.is_empty() {
        return trace.finish(
            Step::new(StepKind::NotFound, format!("{} not found in array.", target))
                .with_snapshot(&arr),
        );
    }

    arr.sort_unstable();
    trace.push(
        Step::new(
            StepKind::Info,
            format!("Sorted array for binary search: {}", format_array(&arr)),
        )
        .with_snapshot(&arr),
    );

    // Inclusive window [low, high]
    let mut low = 0usize;
    let mut high = arr.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let value = arr[mid];

        trace.push(
            Step::new(
                StepKind::Compare,
                format!(
                    "Range [{}..{}], middle index {}: Is {} == {}?",
                    low, high, mid, value, target
                ),
            )
            .with_snapshot(&arr)
            .with_highlights(&[mid]),
        );

        if value == target {
            return trace.finish(
                Step::new(
                    StepKind::Found,
                    format!("Found {} at index {}!", target, mid),
                )
                .with_snapshot(&arr)
                .with_highlights(&[mid]),
            );
        }

        if value < target {
            trace.push(
                Step::new(
                    StepKind::Info,
                    format!(
                        "{} < {}: eliminating left half [{}..{}]",
                        value, target, low, mid
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&(low..=mid).collect::<Vec<_>>()),
            );
            low = mid + 1;
        } else {
            trace.push(
                Step::new(
                    StepKind::Info,
                    format!(
                        "{} > {}: eliminating right half [{}..{}]",
                        value, target, mid, high
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&(mid..=high).collect::<Vec<_>>()),
            );
            // Window would drop below index 0
            let Some(next) = mid.checked_sub(1) else {
                break;
            };
            high = next;
        }
    }

    trace.finish(
        Step::new(StepKind::NotFound, format!("{} not found in array.", target))
            .with_snapshot(&arr),
    )
}
