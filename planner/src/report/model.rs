use crate::workflow::runner::SearchOutcome;
use sarcore::geodesy::LatLon;
use sarcore::model::{AircraftPerformance, ProbabilityPoint, WindState};
use sarcore::telemetry::MetricsSnapshot;
use serde::{Deserialize, Serialize};

/// Run summary written next to the export for the search coordinator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSummary {
    pub aircraft_type: String,
    pub aircraft_fallback: bool,
    pub performance: AircraftPerformance,
    pub last_known: LatLon,
    pub wind: WindState,
    pub center: LatLon,
    pub radius_nm: f64,
    pub glide_distance_nm: f64,
    pub area_sq_nm: f64,
    pub point_count: usize,
    pub seed: u64,
    pub top_points: Vec<ProbabilityPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSnapshot>,
}

impl SearchSummary {
    pub fn from_outcome(outcome: &SearchOutcome, top_n: usize) -> Self {
        Self {
            aircraft_type: outcome.aircraft.name.to_string(),
            aircraft_fallback: outcome.fell_back,
            performance: outcome.aircraft.performance,
            last_known: LatLon::new(outcome.state.latitude, outcome.state.longitude),
            wind: outcome.wind,
            center: outcome.envelope.center,
            radius_nm: outcome.envelope.radius_nm,
            glide_distance_nm: outcome.envelope.glide_distance_nm,
            area_sq_nm: outcome.envelope.area_sq_nm(),
            point_count: outcome.field.len(),
            seed: outcome.seed,
            top_points: outcome.field.top(top_n),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, snapshot: MetricsSnapshot) -> Self {
        self.metrics = Some(snapshot);
        self
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable lines for the console.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Aircraft: {}", self.aircraft_type),
            format!(
                "Search center: {:.6}°N, {:.6}°E",
                self.center.lat, self.center.lon
            ),
            format!("Search radius: {:.2} nautical miles", self.radius_nm),
            format!(
                "Maximum glide distance: {:.2} nautical miles",
                self.glide_distance_nm
            ),
            format!(
                "Total search area: {:.2} square nautical miles",
                self.area_sq_nm
            ),
            format!("Probability points: {} (seed {})", self.point_count, self.seed),
        ];
        if self.aircraft_fallback {
            lines.insert(1, "  (unrecognized type, default performance used)".into());
        }
        for (rank, point) in self.top_points.iter().enumerate() {
            lines.push(format!(
                "  #{} {:.6}, {:.6} p={:.3}",
                rank + 1,
                point.lat,
                point.lon,
                point.probability
            ));
        }
        lines
    }
}
