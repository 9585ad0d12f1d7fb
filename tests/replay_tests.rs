// Integration tests for the replay engine

use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};
use tracetty::algorithms::Algorithm;
use tracetty::replay::{Replay, ReplayError, StepOutcome};
use tracetty::trace::StepKind;

const INTERVAL: Duration = Duration::from_millis(800);

fn bubble(array: &str) -> Replay {
    Replay::new(Algorithm::Bubble, array, "", INTERVAL)
}

#[test]
fn test_fresh_replay_shows_parsed_input() {
    let replay = bubble("64, 34, oops, 25");
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.total_steps(), None);
    assert_eq!(replay.current_array(), &[64, 34, 25]);
    assert!(replay.visible_log().is_empty());
    assert!(replay.current_step().is_none());
    assert!(!replay.is_running());
    assert!(!replay.is_finished());
}

#[test]
fn test_step_generates_trace_lazily() {
    let mut replay = bubble("2, 1");
    assert_eq!(replay.step(), Ok(StepOutcome::Advanced(StepKind::Info)));
    // info, compare, swap, done
    assert_eq!(replay.total_steps(), Some(4));
    assert_eq!(replay.cursor(), 1);
    assert_eq!(replay.visible_log().len(), 1);
    assert_eq!(replay.visible_log()[0].message, "Starting Bubble Sort...");
}

#[test]
fn test_array_follows_snapshots() {
    let mut replay = bubble("2, 1");
    replay.step().unwrap(); // info
    replay.step().unwrap(); // compare
    assert_eq!(replay.current_array(), &[2, 1]);
    assert_eq!(replay.current_step().map(|s| s.kind), Some(StepKind::Compare));
    assert_eq!(replay.current_step().unwrap().highlights, vec![0, 1]);

    replay.step().unwrap(); // swap
    assert_eq!(replay.current_array(), &[1, 2]);
}

#[test]
fn test_step_past_end_is_exhausted() {
    let mut replay = bubble("1");
    assert_eq!(replay.step(), Ok(StepOutcome::Advanced(StepKind::Info)));
    assert_eq!(replay.step(), Ok(StepOutcome::Advanced(StepKind::Done)));
    assert!(replay.is_finished());
    assert_eq!(replay.step(), Ok(StepOutcome::Exhausted));
    assert_eq!(replay.cursor(), 2);
}

#[test]
fn test_step_back() {
    let mut replay = bubble("2, 1");
    assert_eq!(replay.step_back(), Err(ReplayError::AtStart));

    replay.step().unwrap();
    replay.step().unwrap();
    replay.step().unwrap();
    assert_eq!(replay.current_array(), &[1, 2]);

    replay.step_back().unwrap();
    assert_eq!(replay.cursor(), 2);
    assert_eq!(replay.current_array(), &[2, 1]);
}

#[test]
fn test_reset_clears_everything() {
    let mut replay = bubble("3, 2, 1");
    replay.start().unwrap();
    replay.step().unwrap();
    replay.step().unwrap();

    replay.reset();
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.total_steps(), None);
    assert!(!replay.is_running());
    assert!(replay.visible_log().is_empty());
    assert_eq!(replay.current_array(), &[3, 2, 1]);
}

#[test]
fn test_input_change_resets() {
    let mut replay = bubble("3, 2, 1");
    replay.step().unwrap();
    replay.set_array_input("9, 8");
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.total_steps(), None);
    assert_eq!(replay.current_array(), &[9, 8]);
    assert_eq!(replay.array_input(), "9, 8");
}

#[test]
fn test_algorithm_change_stops_playback() {
    let mut replay = bubble("3, 2, 1");
    replay.start().unwrap();
    assert!(replay.is_running());

    replay.set_algorithm(Algorithm::Selection);
    assert!(!replay.is_running());
    assert_eq!(replay.total_steps(), None);
    replay.step().unwrap();
    assert_eq!(replay.visible_log()[0].message, "Starting Selection Sort...");
}

#[test]
fn test_invalid_target_refuses_search() {
    let mut replay = Replay::new(Algorithm::Linear, "1, 2, 3", " abc ", INTERVAL);
    assert_eq!(
        replay.step(),
        Err(ReplayError::InvalidTarget {
            input: "abc".to_string()
        })
    );
    assert_eq!(replay.total_steps(), None);
    assert!(replay.start().is_err());
    assert!(!replay.is_running());

    replay.set_target_input("2");
    replay.jump_to_end().unwrap();
    assert_eq!(replay.current_step().map(|s| s.kind), Some(StepKind::Found));
}

#[test]
fn test_sorting_ignores_target() {
    let mut replay = Replay::new(Algorithm::Insertion, "2, 1", "not a number", INTERVAL);
    assert!(replay.step().is_ok());
}

#[test]
fn test_auto_play_respects_interval() {
    let mut replay = bubble("3, 2, 1");
    let t0 = Instant::now();
    replay.start().unwrap();

    // First tick fires immediately
    assert!(matches!(replay.tick(t0), Some(Ok(StepOutcome::Advanced(_)))));
    assert_eq!(replay.cursor(), 1);

    assert!(replay.tick(t0 + Duration::from_millis(100)).is_none());
    assert_eq!(replay.cursor(), 1);

    assert!(replay.tick(t0 + INTERVAL).is_some());
    assert_eq!(replay.cursor(), 2);
}

#[test]
fn test_auto_play_halts_at_end() {
    let mut replay = bubble("3, 2, 1");
    let mut now = Instant::now();
    replay.start().unwrap();

    let mut ticks = 0;
    while replay.is_running() {
        replay.tick(now);
        now += INTERVAL;
        ticks += 1;
        assert!(ticks < 100, "auto-play never stopped");
    }

    let total = replay.total_steps().unwrap();
    assert_eq!(ticks, total);
    assert_eq!(replay.cursor(), total);
    assert!(replay.is_finished());
    assert_eq!(replay.current_array(), &[1, 2, 3]);
    assert!(replay.tick(now).is_none());

    // Starting again at the end does nothing
    replay.start().unwrap();
    assert!(!replay.is_running());
}

#[test]
fn test_pause_stops_ticks() {
    let mut replay = bubble("3, 2, 1");
    let t0 = Instant::now();
    assert_eq!(replay.toggle_play(), Ok(true));
    replay.tick(t0);
    assert_eq!(replay.toggle_play(), Ok(false));
    assert!(replay.tick(t0 + INTERVAL * 5).is_none());
    assert_eq!(replay.cursor(), 1);
}

#[test]
fn test_jump_to_end() {
    let mut replay = Replay::new(Algorithm::Binary, "64, 34, 25, 12, 22, 11, 90", "22", INTERVAL);
    replay.jump_to_end().unwrap();
    assert!(replay.is_finished());
    assert_eq!(replay.current_array(), &[11, 12, 22, 25, 34, 64, 90]);
    assert_eq!(replay.current_step().unwrap().highlights, vec![2]);

    let counts = replay.revealed_counts();
    assert_eq!(counts.get(&StepKind::Compare), Some(&3));
    assert_eq!(counts.get(&StepKind::Found), Some(&1));
}
