//! Terminal dashboard shell.
//!
//! Card-based pages behind tab navigation, rendered with ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_dashboard, ActionStatus, DashboardApp, Page};
pub use event_handler::UiEvent;
