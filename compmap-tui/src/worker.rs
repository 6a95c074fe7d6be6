//! Background loader thread.
//!
//! Loading may hit the network, so it runs off the UI thread and hands the
//! finished [`Dataset`] back over an `mpsc` channel. The UI keeps drawing
//! its loading state until the response arrives.

use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use compmap_core::{load_dataset, Dataset, ExplorerConfig};
use tracing::{debug, info, warn};

/// Responses sent from the loader back to the TUI.
#[derive(Debug)]
pub enum LoaderResponse {
    Loaded(Box<Dataset>),
}

/// Spawn the loader thread. It sends exactly one response and exits.
pub fn spawn_loader(
    config: ExplorerConfig,
    tx: Sender<LoaderResponse>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("compmap-loader".into())
        .spawn(move || {
            let started = Instant::now();
            let dataset = load_dataset(&config);
            info!(
                origin = dataset.origin.label(),
                mains = dataset.mapping.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "load finished"
            );
            for w in &dataset.warnings {
                warn!("{w}");
            }
            if tx.send(LoaderResponse::Loaded(Box::new(dataset))).is_err() {
                debug!("ui closed before load finished");
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn loader_sends_one_dataset() {
        let config = ExplorerConfig {
            mapping: "/nonexistent/components.json".into(),
            customs: "/nonexistent/customs.json".into(),
            fallback_csv: None,
            ..ExplorerConfig::default()
        };
        let (tx, rx) = mpsc::channel();
        let handle = spawn_loader(config, tx).unwrap();
        handle.join().unwrap();

        let LoaderResponse::Loaded(dataset) = rx.recv().unwrap();
        assert!(dataset.mapping.is_empty());
        assert!(!dataset.warnings.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
