// Rendering and key handling tests for the TUI, driven through ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};
use tracetty::algorithms::Algorithm;
use tracetty::config::Config;
use tracetty::replay::Replay;
use tracetty::ui::app::{InputField, OutputView, Screen};
use tracetty::ui::App;

fn app(algorithm: Algorithm, on_menu: bool) -> App {
    let config = Config::default();
    let (array, target) = if algorithm.needs_target() {
        (config.searching.array.clone(), config.searching.target.clone())
    } else {
        (config.sorting.array.clone(), config.searching.target.clone())
    };
    let replay = Replay::new(algorithm, array, target, config.play_interval());
    App::new(replay, config, on_menu)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_menu_lists_all_algorithms() {
    let mut app = app(Algorithm::Bubble, true);
    let text = screen_text(&mut app);
    for algorithm in Algorithm::ALL {
        assert!(text.contains(algorithm.name()), "missing {}", algorithm.name());
    }
    assert!(text.contains("SORTING"));
    assert!(text.contains("SEARCHING"));
}

#[test]
fn test_menu_opens_searching_with_defaults() {
    let mut app = app(Algorithm::Bubble, true);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Visualizer);
    assert_eq!(app.replay.algorithm(), Algorithm::Linear);
    assert_eq!(app.replay.array_input(), "12, 25, 34, 64, 22, 11, 90");
    assert_eq!(app.replay.target_input(), "22");
}

#[test]
fn test_menu_selection_is_clamped() {
    let mut app = app(Algorithm::Bubble, true);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.menu_selection, 0);
    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.menu_selection, Algorithm::ALL.len() - 1);
}

#[test]
fn test_step_keys() {
    let mut app = app(Algorithm::Linear, false);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.replay.cursor(), 1);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.replay.cursor(), 4);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.replay.cursor(), 3);
    press(&mut app, KeyCode::Enter);
    assert!(app.replay.is_finished());
    assert_eq!(app.status_message, "Jumped to end");
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.replay.cursor(), 0);
    assert_eq!(app.replay.total_steps(), None);
}

#[test]
fn test_log_and_bars_render() {
    let mut app = app(Algorithm::Linear, false);
    press(&mut app, KeyCode::Char('2'));
    let text = screen_text(&mut app);

    assert!(text.contains("LINEAR SEARCH"));
    assert!(text.contains("OUTPUT"));
    assert!(text.contains("[000] > INFO: Starting Linear Search for 22..."));
    assert!(text.contains("[001] > CMP: Checking index 0: Is 12 == 22?"));
    assert!(text.contains("Step 2/7"));
    assert!(text.contains("90"));
}

#[test]
fn test_code_view_toggle() {
    let mut app = app(Algorithm::Bubble, false);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.view, OutputView::Code);
    let text = screen_text(&mut app);
    assert!(text.contains("void bubbleSort(int arr[], int n) {"));

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.view, OutputView::Console);
}

#[test]
fn test_edit_array_resets_trace() {
    let mut app = app(Algorithm::Bubble, false);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.editing, Some((InputField::Array, _))));

    // Keys are text while editing
    type_text(&mut app, ", 5q");
    press(&mut app, KeyCode::Backspace);
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Enter);

    assert!(app.editing.is_none());
    assert_eq!(app.replay.array_input(), "64, 34, 25, 12, 22, 11, 90, 5");
    assert_eq!(app.replay.cursor(), 0);
    assert_eq!(app.replay.current_array().len(), 8);
}

#[test]
fn test_edit_cancel_keeps_input() {
    let mut app = app(Algorithm::Binary, false);
    press(&mut app, KeyCode::Char('t'));
    assert!(matches!(app.editing, Some((InputField::Target, _))));
    type_text(&mut app, "99");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.replay.target_input(), "22");
}

#[test]
fn test_target_field_only_for_search() {
    let mut app = app(Algorithm::Selection, false);
    press(&mut app, KeyCode::Char('t'));
    assert!(app.editing.is_none());
}

#[test]
fn test_invalid_target_shows_error() {
    let mut app = app(Algorithm::Linear, false);
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "x");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Right);
    assert!(app.status_is_error);
    assert!(app.status_message.contains("not a number"));
    assert_eq!(app.replay.cursor(), 0);
}

#[test]
fn test_play_runs_to_completion() {
    let mut app = app(Algorithm::Linear, false);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.replay.is_running());

    let mut now = Instant::now();
    for _ in 0..20 {
        app.on_tick(now);
        now += Duration::from_millis(800);
    }
    assert!(!app.replay.is_running());
    assert!(app.replay.is_finished());
    assert_eq!(app.status_message, "Playback complete: target found");
}

#[test]
fn test_back_to_menu_and_quit() {
    let mut app = app(Algorithm::Bubble, false);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.screen, Screen::Menu);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_tab_returns_to_menu() {
    let mut app = app(Algorithm::Insertion, false);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Menu);
    assert_eq!(app.view, OutputView::Console);
    assert!(!app.replay.is_running());
}
