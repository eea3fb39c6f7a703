use anyhow::Context;
use clap::Parser;
use log::info;
use report::model::SearchSummary;
use sarcore::aircraft;
use sarcore::export::ExportFormat;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use workflow::config::{ScenarioConfig, ScenarioOverrides};
use workflow::runner::Runner;

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Estimate the search area for a missing aircraft")]
struct Args {
    /// Load the search scenario from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Aircraft class name from the performance catalog
    #[arg(long)]
    aircraft: Option<String>,
    /// Last known latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Last known longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Last known altitude in feet
    #[arg(long)]
    altitude: Option<f64>,
    /// Last known ground speed in knots
    #[arg(long)]
    ground_speed: Option<f64>,
    /// Last known heading in degrees true
    #[arg(long)]
    heading: Option<f64>,
    /// Last known vertical speed in ft/min, negative while descending
    #[arg(long, allow_hyphen_values = true)]
    vertical_speed: Option<f64>,
    #[arg(long)]
    wind_speed: Option<f64>,
    /// Direction the wind blows toward, degrees true
    #[arg(long)]
    wind_direction: Option<f64>,
    #[arg(long)]
    radius_multiplier: Option<f64>,
    /// Number of probability points to sample
    #[arg(long)]
    points: Option<usize>,
    /// Seed for a reproducible probability field
    #[arg(long)]
    seed: Option<u64>,
    /// Reject aircraft types missing from the catalog instead of using the default
    #[arg(long, default_value_t = false)]
    strict_aircraft: bool,
    /// Export format: csv or geojson
    #[arg(long, default_value = "csv")]
    format: ExportFormat,
    /// Write the export here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Number of most likely points listed in the summary
    #[arg(long, default_value_t = 5)]
    top: usize,
    /// Print the aircraft performance catalog and exit
    #[arg(long, default_value_t = false)]
    list_aircraft: bool,
}

impl Args {
    fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            aircraft_type: self.aircraft.clone(),
            latitude: self.lat,
            longitude: self.lon,
            altitude_ft: self.altitude,
            ground_speed_kn: self.ground_speed,
            heading_deg: self.heading,
            vertical_speed_fpm: self.vertical_speed,
            wind_speed_kn: self.wind_speed,
            wind_direction_deg: self.wind_direction,
            radius_multiplier: self.radius_multiplier,
            point_count: self.points,
            seed: self.seed,
            strict_aircraft: self.strict_aircraft,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_aircraft {
        print_catalog();
        return Ok(());
    }

    let scenario = if let Some(path) = &args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::default()
    };
    let scenario = scenario.apply(args.overrides());

    let runner = Runner::new(scenario);
    let outcome = runner.execute()?;

    let export = args
        .format
        .render(&outcome.envelope, &outcome.field)
        .with_context(|| format!("rendering {} export", args.format))?;

    let summary = SearchSummary::from_outcome(&outcome, args.top).with_metrics(runner.metrics());

    match &args.output {
        Some(path) => {
            write_file(path, &export)?;
            info!("{} export written to {}", args.format, path.display());
            for line in summary.lines() {
                println!("{}", line);
            }
        }
        None => {
            io::stdout()
                .write_all(export.as_bytes())
                .context("writing export to stdout")?;
            // keep stdout clean for the export itself
            for line in summary.lines() {
                eprintln!("{}", line);
            }
        }
    }

    if let Some(path) = &args.summary {
        write_file(path, &summary.to_json()?)?;
        info!("run summary written to {}", path.display());
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

fn print_catalog() {
    println!(
        "{:<40} {:>6} {:>10} {:>8} {:>8} {:>10}",
        "Aircraft", "Glide", "Range nm", "Cruise", "Endur h", "Desc fpm"
    );
    for entry in aircraft::catalog() {
        let perf = &entry.performance;
        println!(
            "{:<40} {:>6.1} {:>10.0} {:>8.0} {:>8.1} {:>10.0}",
            entry.name,
            perf.glide_ratio,
            perf.max_range_nm,
            perf.cruise_speed_kn,
            perf.fuel_endurance_hr,
            perf.emergency_descent_rate_fpm
        );
    }
}
