//! Dataset loading with the spreadsheet fallback path.
//!
//! `load_dataset` never fails: a total failure yields an empty mapping plus
//! warnings, so the explorer can still start and render its empty states.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ExplorerConfig;
use crate::custom::CustomSet;
use crate::data::json;
use crate::data::source::{read_source, LoadError};
use crate::data::spreadsheet;
use crate::index::SourceMapping;

/// Where the mapping came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataOrigin {
    Json,
    Spreadsheet,
    Empty,
}

impl DataOrigin {
    pub fn label(self) -> &'static str {
        match self {
            DataOrigin::Json => "json",
            DataOrigin::Spreadsheet => "spreadsheet",
            DataOrigin::Empty => "empty",
        }
    }
}

/// Everything the explorer needs from the outside world.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub mapping: SourceMapping,
    pub customs: CustomSet,
    pub origin: DataOrigin,
    /// Non-fatal problems hit while loading, in the order they occurred.
    pub warnings: Vec<String>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self {
            mapping: SourceMapping::new(),
            customs: CustomSet::new(),
            origin: DataOrigin::Empty,
            warnings: Vec::new(),
        }
    }
}

/// Load the JSON mapping, falling back to the spreadsheet export.
pub fn load_mapping(config: &ExplorerConfig) -> Result<(SourceMapping, DataOrigin), LoadError> {
    let primary = read_source(&config.mapping)
        .and_then(|text| json::parse_mapping(&text, &config.mapping));

    let primary_err = match primary {
        Ok(mapping) => {
            info!(source = %config.mapping, mains = mapping.len(), "loaded JSON mapping");
            return Ok((mapping, DataOrigin::Json));
        }
        Err(e) => e,
    };

    let Some(fallback) = config.fallback_csv.as_deref() else {
        return Err(primary_err);
    };
    warn!(error = %primary_err, fallback, "JSON load failed, trying spreadsheet export");

    let text = read_source(fallback)?;
    let mapping = spreadsheet::parse_columns(&text, fallback)?;
    info!(source = fallback, mains = mapping.len(), "loaded spreadsheet mapping");
    Ok((mapping, DataOrigin::Spreadsheet))
}

/// Load the custom-name list. Independent of which mapping source won.
pub fn load_customs(config: &ExplorerConfig) -> Result<CustomSet, LoadError> {
    let text = read_source(&config.customs)?;
    json::parse_customs(&text, &config.customs)
}

/// Load everything, normalizing failures into warnings.
pub fn load_dataset(config: &ExplorerConfig) -> Dataset {
    let mut dataset = Dataset::empty();

    match load_mapping(config) {
        Ok((mapping, origin)) => {
            dataset.mapping = mapping;
            dataset.origin = origin;
        }
        Err(e) => {
            warn!(error = %e, "no mapping could be loaded; starting empty");
            dataset.warnings.push(format!("mapping: {e}"));
        }
    }

    match load_customs(config) {
        Ok(customs) => dataset.customs = customs,
        Err(e) => {
            warn!(error = %e, "custom component list unavailable");
            dataset.warnings.push(format!("customs: {e}"));
        }
    }

    dataset
}
