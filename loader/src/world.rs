use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoaderError;

/// The world-countries GeoJSON, parsed only as far as a map renderer needs:
/// one feature per country, geometry kept as raw JSON for projection.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldMap {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<CountryFeature>,
}

/// One country outline from the world file.
#[derive(Clone, Debug, Deserialize)]
pub struct CountryFeature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Value,
    pub geometry: Value,
}

impl CountryFeature {
    /// The country name, when the feature's properties carry one.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}

/// Reads and parses the world-countries GeoJSON file.
pub fn load_world(path: &Path) -> Result<WorldMap, LoaderError> {
    let file = File::open(path)?;
    let world = serde_json::from_reader(BufReader::new(file))?;
    Ok(world)
}
