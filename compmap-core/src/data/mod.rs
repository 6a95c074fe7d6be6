//! Data acquisition: JSON mapping, spreadsheet fallback, custom names.

pub mod json;
pub mod loader;
pub mod source;
pub mod spreadsheet;

pub use loader::{load_customs, load_dataset, load_mapping, DataOrigin, Dataset};
pub use source::{read_source, LoadError};
