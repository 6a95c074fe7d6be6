//! Compmap Core — component ↔ subcomponent index and explorer state.
//!
//! This crate contains everything the explorer front ends share:
//! - Bidirectional relation index built from a one-directional mapping
//! - Doc link resolution for subcomponents
//! - Selection state machine (grid highlight, overlay drill, detail panel)
//! - Shared-subcomponent chart dataset with a keyboard focus cursor
//! - Grid catalog (filtering, card data)
//! - Explorer session that owns all of the above behind one event type
//! - Loaders (JSON, spreadsheet CSV fallback) and TOML configuration

pub mod catalog;
pub mod chart;
pub mod collate;
pub mod config;
pub mod custom;
pub mod data;
pub mod index;
pub mod link;
pub mod selection;
pub mod session;

pub use chart::{ChartFocusModel, ChartKey, ChartPoint};
pub use config::{ConfigError, ExplorerConfig};
pub use custom::CustomSet;
pub use data::{load_dataset, DataOrigin, Dataset, LoadError};
pub use index::{RelationIndex, SourceMapping};
pub use link::DocLinks;
pub use selection::{SelectionController, SelectionState};
pub use session::{Explorer, ExplorerEvent};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: state handed to the TUI loader thread is Send,
    /// and the shared index is Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Dataset>();
        require_send::<LoadError>();
        require_send::<ExplorerConfig>();
        require_send::<RelationIndex>();
        require_sync::<RelationIndex>();
        require_send::<Explorer>();
        require_sync::<Explorer>();
    }
}
