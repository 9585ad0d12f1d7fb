//! User input parsing
//!
//! - [`input`]: comma-separated array and search target fields
//!
//! Parsing never fails: tokens without a number are discarded and an
//! unparseable target becomes `None`, which the replay engine reports when a
//! search is requested.

pub mod input;
