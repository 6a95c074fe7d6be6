//! Primary JSON format: `{"mainToSub": {main: [sub, ...]}}` plus a JSON
//! array of custom names.

use serde::Deserialize;

use crate::custom::CustomSet;
use crate::data::source::LoadError;
use crate::index::SourceMapping;

#[derive(Debug, Deserialize)]
struct MappingDocument {
    #[serde(rename = "mainToSub", default)]
    main_to_sub: SourceMapping,
}

pub fn parse_mapping(text: &str, location: &str) -> Result<SourceMapping, LoadError> {
    let doc: MappingDocument = serde_json::from_str(text).map_err(|e| LoadError::Json {
        location: location.to_string(),
        source: e,
    })?;
    Ok(doc.main_to_sub)
}

pub fn parse_customs(text: &str, location: &str) -> Result<CustomSet, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Json {
        location: location.to_string(),
        source: e,
    })
}
