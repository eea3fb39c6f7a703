use anyhow::Context;
use sarcore::aircraft::DEFAULT_AIRCRAFT;
use sarcore::model::{KinematicState, WindState};
use sarcore::request::SearchRequest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A search scenario as read from YAML. Missing keys take the defaults of
/// the planning dashboard (a cruise over San Francisco Bay).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub aircraft_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: f64,
    pub ground_speed_kn: f64,
    pub heading_deg: f64,
    pub vertical_speed_fpm: f64,
    pub wind_speed_kn: f64,
    pub wind_direction_deg: f64,
    pub radius_multiplier: f64,
    pub point_count: usize,
    pub seed: Option<u64>,
    pub strict_aircraft: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            aircraft_type: DEFAULT_AIRCRAFT.to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            altitude_ft: 30_000.0,
            ground_speed_kn: 450.0,
            heading_deg: 90.0,
            vertical_speed_fpm: 0.0,
            wind_speed_kn: 15.0,
            wind_direction_deg: 270.0,
            radius_multiplier: 2.0,
            point_count: 1000,
            seed: None,
            strict_aircraft: false,
        }
    }
}

/// Command-line values that take precedence over the scenario file.
#[derive(Clone, Debug, Default)]
pub struct ScenarioOverrides {
    pub aircraft_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude_ft: Option<f64>,
    pub ground_speed_kn: Option<f64>,
    pub heading_deg: Option<f64>,
    pub vertical_speed_fpm: Option<f64>,
    pub wind_speed_kn: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub radius_multiplier: Option<f64>,
    pub point_count: Option<usize>,
    pub seed: Option<u64>,
    pub strict_aircraft: bool,
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn apply(mut self, overrides: ScenarioOverrides) -> Self {
        if let Some(value) = overrides.aircraft_type {
            self.aircraft_type = value;
        }
        let numeric = [
            (&mut self.latitude, overrides.latitude),
            (&mut self.longitude, overrides.longitude),
            (&mut self.altitude_ft, overrides.altitude_ft),
            (&mut self.ground_speed_kn, overrides.ground_speed_kn),
            (&mut self.heading_deg, overrides.heading_deg),
            (&mut self.vertical_speed_fpm, overrides.vertical_speed_fpm),
            (&mut self.wind_speed_kn, overrides.wind_speed_kn),
            (&mut self.wind_direction_deg, overrides.wind_direction_deg),
            (&mut self.radius_multiplier, overrides.radius_multiplier),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(points) = overrides.point_count {
            self.point_count = points;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.strict_aircraft |= overrides.strict_aircraft;
        self
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            aircraft_type: self.aircraft_type.clone(),
            state: KinematicState {
                latitude: self.latitude,
                longitude: self.longitude,
                altitude_ft: self.altitude_ft,
                ground_speed_kn: self.ground_speed_kn,
                heading_deg: self.heading_deg,
                vertical_speed_fpm: self.vertical_speed_fpm,
            },
            wind: WindState {
                speed_kn: self.wind_speed_kn,
                direction_deg: self.wind_direction_deg,
            },
            radius_multiplier: self.radius_multiplier,
            point_count: self.point_count,
        }
    }
}
