use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sarcore::aircraft::AircraftProfile;
use sarcore::model::{KinematicState, ProbabilityField, SearchEnvelope, WindState};
use sarcore::telemetry::{MetricsRecorder, MetricsSnapshot};
use sarcore::{EnvelopeEstimator, FieldGenerator};
use std::sync::Arc;

pub struct SearchOutcome {
    pub aircraft: &'static AircraftProfile,
    pub fell_back: bool,
    pub state: KinematicState,
    pub wind: WindState,
    pub envelope: SearchEnvelope,
    pub field: ProbabilityField,
    /// Seed of the random stream that produced `field`.
    pub seed: u64,
}

#[derive(Clone)]
pub struct Runner {
    config: ScenarioConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runs the estimator and the field generator on their own random stream.
    ///
    /// Without a configured seed one is drawn and logged so the run can be
    /// repeated.
    pub fn execute(&self) -> anyhow::Result<SearchOutcome> {
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        info!("search run seed {}", seed);

        let result = self.execute_seeded(seed);
        match &result {
            Ok(outcome) => self.metrics.record_completed(outcome.field.len()),
            Err(_) => self.metrics.record_failure(),
        }
        result
    }

    fn execute_seeded(&self, seed: u64) -> anyhow::Result<SearchOutcome> {
        let request = self.config.to_request();
        let resolved = request
            .validate(self.config.strict_aircraft)
            .context("validating search request")?;

        let estimator = EnvelopeEstimator::new(resolved.radius_multiplier)
            .context("configuring envelope estimator")?;
        let envelope = estimator
            .estimate(
                &resolved.state,
                &resolved.wind,
                &resolved.aircraft.performance,
            )
            .context("estimating search envelope")?;

        let generator =
            FieldGenerator::new(resolved.point_count).context("configuring field generator")?;
        let mut rng = StdRng::seed_from_u64(seed);
        let field = generator
            .generate(
                &envelope,
                resolved.state.heading_deg,
                &resolved.wind,
                &mut rng,
            )
            .context("generating probability field")?;

        Ok(SearchOutcome {
            aircraft: resolved.aircraft,
            fell_back: resolved.fell_back,
            state: resolved.state,
            wind: resolved.wind,
            envelope,
            field,
            seed,
        })
    }
}
