use super::boundary_ring;
use super::number::repr_f64;
use crate::model::{ProbabilityField, SearchEnvelope};
use crate::prelude::{SearchError, SearchResult};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Field points at or below this value are left out of the GeoJSON.
pub const GEOJSON_PROBABILITY_THRESHOLD: f64 = 0.5;

#[derive(Serialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Properties,
}

/// One coordinate, written with the same float text as the CSV export
/// (`5e-05` rather than serde_json's `0.00005`).
struct Ordinate(f64);

impl Serialize for Ordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(repr_f64(self.0)).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

/// `[longitude, latitude]`
type Position = [Ordinate; 2];

fn position(lat: f64, lon: f64) -> Position {
    [Ordinate(lon), Ordinate(lat)]
}

#[derive(Serialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Point(Position),
    Polygon(Vec<Vec<Position>>),
}

#[derive(Serialize)]
struct Properties {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    probability: Option<f64>,
    description: String,
}

impl Feature {
    fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

/// GeoJSON export: center point, closed boundary polygon, and every field
/// point above [`GEOJSON_PROBABILITY_THRESHOLD`], pretty printed with a
/// two-space indent.
pub fn to_geojson(envelope: &SearchEnvelope, field: &ProbabilityField) -> SearchResult<String> {
    let mut features = Vec::new();

    features.push(Feature::new(
        Geometry::Point(position(envelope.center.lat, envelope.center.lon)),
        Properties {
            kind: "center",
            probability: Some(1.0),
            description: "Search Area Center".into(),
        },
    ));

    let ring = boundary_ring(envelope, true)
        .into_iter()
        .map(|p| position(p.lat, p.lon))
        .collect();
    features.push(Feature::new(
        Geometry::Polygon(vec![ring]),
        Properties {
            kind: "boundary",
            probability: None,
            description: format!("Search Area Boundary ({:.2} nm radius)", envelope.radius_nm),
        },
    ));

    features.extend(field.above(GEOJSON_PROBABILITY_THRESHOLD).map(|point| {
        Feature::new(
            Geometry::Point(position(point.lat, point.lon)),
            Properties {
                kind: "probability",
                probability: Some(point.probability),
                description: format!("Probability: {:.2}", point.probability),
            },
        )
    }));

    let collection = FeatureCollection {
        kind: "FeatureCollection",
        features,
    };
    serde_json::to_string_pretty(&collection)
        .map_err(|err| SearchError::Export(format!("serializing GeoJSON: {}", err)))
}
