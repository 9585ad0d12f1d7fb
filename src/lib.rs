//! # Introduction
//!
//! tracetty replays textbook sorting and searching algorithms one narrated
//! step at a time. Each algorithm runs to completion up front and records a
//! [`trace::Trace`]; the trace is then revealed step by step through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), with the array
//! drawn as bars and every comparison and swap written to a log.
//!
//! ## Pipeline
//!
//! ```text
//! CSV input → parser::input → algorithms::simulate → Trace → replay::Replay → TUI
//! ```
//!
//! 1. [`parser`] — turns the comma-separated array and the target into numbers,
//!    dropping malformed tokens.
//! 2. [`algorithms`] — pure simulators for bubble, selection and insertion
//!    sort, linear and binary search.
//! 3. [`trace`] — the [`trace::Step`] record and the terminal-step invariant of
//!    [`trace::Trace`].
//! 4. [`replay`] — cursor-based replay: step, step back, auto-play, reset.
//! 5. [`config`] / [`logging`] — TOML configuration and file logging.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod replay;
pub mod trace;
pub mod ui;
