//! Interchange formats handed to search teams: CSV and GeoJSON.
//!
//! Both start from the same envelope and field; the boundary is traced with
//! the great-circle destination formula at 10° bearing steps.

pub mod delimited;
pub mod geojson;
pub mod number;

use crate::geodesy::{destination_point, LatLon};
use crate::model::{ProbabilityField, SearchEnvelope};
use crate::prelude::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use delimited::to_csv;
pub use geojson::to_geojson;

pub const BOUNDARY_POINTS: usize = 36;
const BOUNDARY_STEP_DEG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    GeoJson,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::GeoJson => "geojson",
        }
    }

    pub fn render(
        &self,
        envelope: &SearchEnvelope,
        field: &ProbabilityField,
    ) -> SearchResult<String> {
        match self {
            ExportFormat::Csv => to_csv(envelope, field),
            ExportFormat::GeoJson => to_geojson(envelope, field),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "geojson" => Ok(ExportFormat::GeoJson),
            other => Err(SearchError::Validation(format!(
                "unknown export format '{}', expected csv or geojson",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("CSV"),
            ExportFormat::GeoJson => f.write_str("GeoJSON"),
        }
    }
}

/// Points on the search boundary at 0°, 10°, ... 350°. With `closed` the
/// first point is repeated at the end to close the ring.
pub fn boundary_ring(envelope: &SearchEnvelope, closed: bool) -> Vec<LatLon> {
    let count = if closed {
        BOUNDARY_POINTS + 1
    } else {
        BOUNDARY_POINTS
    };
    (0..count)
        .map(|i| {
            // the radian round trip shifts some bearings by an ulp, which the
            // exported coordinates must carry
            let bearing = ((i % BOUNDARY_POINTS) as f64 * BOUNDARY_STEP_DEG)
                .to_radians()
                .to_degrees();
            destination_point(envelope.center, bearing, envelope.radius_nm)
        })
        .collect()
}
