//! Test helpers for building app state over small datasets

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use compmap_core::{CustomSet, DataOrigin, Dataset, DocLinks, SourceMapping};

use crate::app::AppState;

/// Button, Link and TextField sharing Label and Icon.
pub fn sample_dataset() -> Dataset {
    let mut mapping = SourceMapping::new();
    mapping.insert("Button".into(), vec!["Label".into(), "Icon".into()]);
    mapping.insert("Link".into(), vec!["Label".into()]);
    mapping.insert(
        "TextField".into(),
        vec!["Label".into(), "Input".into(), "Icon".into()],
    );
    Dataset {
        mapping,
        customs: ["Icon".to_string()].into_iter().collect::<CustomSet>(),
        origin: DataOrigin::Json,
        warnings: Vec::new(),
    }
}

pub fn sample_app() -> AppState {
    AppState::with_dataset(sample_dataset(), DocLinks::default())
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
