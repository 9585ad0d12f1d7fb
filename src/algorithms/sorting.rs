//! Sorting simulators
//!
//! Each function sorts a private copy of its input ascending and narrates every
//! comparison and swap. Snapshots are taken after the event they describe, so
//! the terminal `Done` step always carries the fully sorted array.

use crate::trace::{format_array, Step, StepKind, Trace, TraceBuilder};

/// Adjacent pairwise compare-and-swap, n-1 passes with a shrinking inner loop
pub fn bubble_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut trace = TraceBuilder::new();

    trace.push(Step::new(StepKind::Info, "Starting Bubble Sort...").with_snapshot(&arr));

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            trace.push(
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Comparing arr[{}] ({}) and arr[{}] ({})",
                        j,
                        arr[j],
                        j + 1,
                        arr[j + 1]
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&[j, j + 1]),
            );

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                trace.push(
                    Step::new(
                        StepKind::Swap,
                        format!(
                            "Swapped arr[{}] and arr[{}]. Array: {}",
                            j,
                            j + 1,
                            format_array(&arr)
                        ),
                    )
                    .with_snapshot(&arr)
                    .with_highlights(&[j, j + 1]),
                );
            }
        }
    }

    trace.finish(Step::new(StepKind::Done, "Bubble Sort Complete.").with_snapshot(&arr))
}

/// Repeatedly select the minimum of the unsorted suffix and move it into place
pub fn selection_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut trace = TraceBuilder::new();

    trace.push(Step::new(StepKind::Info, "Starting Selection Sort...").with_snapshot(&arr));

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        trace.push(
            Step::new(
                StepKind::Info,
                format!("Finding minimum starting from index {}", i),
            )
            .with_snapshot(&arr)
            .with_highlights(&[i]),
        );

        for j in (i + 1)..n {
            trace.push(
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Check if arr[{}] ({}) < current min ({})",
                        j, arr[j], arr[min_idx]
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&[j, min_idx]),
            );

            if arr[j] < arr[min_idx] {
                min_idx = j;
                trace.push(
                    Step::new(
                        StepKind::Info,
                        format!("New minimum found at index {} ({})", min_idx, arr[min_idx]),
                    )
                    .with_snapshot(&arr)
                    .with_highlights(&[min_idx]),
                );
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            trace.push(
                Step::new(
                    StepKind::Swap,
                    format!(
                        "Swapped minimum ({}) with arr[{}]. Array: {}",
                        arr[i],
                        i,
                        format_array(&arr)
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&[i, min_idx]),
            );
        }
    }

    trace.finish(Step::new(StepKind::Done, "Selection Sort Complete.").with_snapshot(&arr))
}

/// Grow a sorted prefix by sinking each new key past its larger predecessors.
///
/// The shift is carried out as adjacent swaps of the key with the predecessor,
/// so every snapshot stays a permutation of the input.
pub fn insertion_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut trace = TraceBuilder::new();

    trace.push(Step::new(StepKind::Info, "Starting Insertion Sort...").with_snapshot(&arr));

    for i in 1..n {
        let key = arr[i];
        trace.push(
            Step::new(
                StepKind::Info,
                format!("Inserting arr[{}] ({}) into the sorted prefix", i, key),
            )
            .with_snapshot(&arr)
            .with_highlights(&[i]),
        );

        // `pos` is where the key currently sits
        let mut pos = i;
        while pos > 0 {
            trace.push(
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Is arr[{}] ({}) > key ({})?",
                        pos - 1,
                        arr[pos - 1],
                        key
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&[pos - 1, pos]),
            );

            if arr[pos - 1] > key {
                arr.swap(pos - 1, pos);
                pos -= 1;
            } else {
                break;
            }
        }

        if pos != i {
            trace.push(
                Step::new(
                    StepKind::Swap,
                    format!(
                        "Placed key ({}) at index {}. Array: {}",
                        key,
                        pos,
                        format_array(&arr)
                    ),
                )
                .with_snapshot(&arr)
                .with_highlights(&[pos, i]),
            );
        } else {
            trace.push(
                Step::new(
                    StepKind::Info,
                    format!("arr[{}] ({}) is already in place", i, key),
                )
                .with_snapshot(&arr)
                .with_highlights(&[i]),
            );
        }
    }

    trace.finish(Step::new(StepKind::Done, "Insertion Sort Complete.").with_snapshot(&arr))
}
