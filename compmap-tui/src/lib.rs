//! Compmap TUI — terminal explorer for the component ↔ subcomponent index.
//!
//! Provides three synchronized panels over one [`compmap_core::Explorer`]:
//! - Component grid with filtering
//! - Shared-subcomponent bar chart with keyboard focus
//! - Detail list of components using the chosen subcomponent
//!
//! plus mouse hover and click on the chart, a component dialog with
//! drill-down, a help overlay, and a
//! background loader thread.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::{AppState, Panel};
pub use input::{handle_key, handle_mouse};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
