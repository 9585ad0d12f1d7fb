//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data borrowed from the
//! [`Replay`](crate::replay::Replay) engine; scroll offsets are the only state
//! passed by mutable reference.
//!
//! # Pane Modules
//!
//! - [`menu`]: algorithm selection screen grouped by category
//! - [`array`]: bar chart of the current array, colored by the latest step
//! - [`params`]: input fields plus replay status and tallies
//! - [`log`]: revealed steps in console form
//! - [`code`]: reference listing with syntax highlighting
//! - [`status`]: status bar with keybindings and replay position

pub mod array;
pub mod code;
pub mod log;
pub mod menu;
pub mod params;
pub mod status;

pub use array::render_array_pane;
pub use code::render_code_pane;
pub use log::render_log_pane;
pub use menu::render_menu;
pub use params::{render_params_pane, ParamsRenderData};
pub use status::{render_status_bar, StatusRenderData};
