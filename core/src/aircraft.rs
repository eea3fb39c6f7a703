//! Static performance catalog keyed by aircraft class name.
//!
//! Unknown names resolve to the default entry rather than failing, so a
//! search can always be started; strict callers use [`find`].

use crate::model::AircraftPerformance;

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftProfile {
    pub name: &'static str,
    pub performance: AircraftPerformance,
}

pub const DEFAULT_AIRCRAFT: &str = "Small Single-Engine (Cessna 172)";

const fn profile(
    name: &'static str,
    glide_ratio: f64,
    max_range_nm: f64,
    cruise_speed_kn: f64,
    fuel_endurance_hr: f64,
    emergency_descent_rate_fpm: f64,
) -> AircraftProfile {
    AircraftProfile {
        name,
        performance: AircraftPerformance {
            glide_ratio,
            emergency_descent_rate_fpm,
            max_range_nm,
            cruise_speed_kn,
            fuel_endurance_hr,
        },
    }
}

static CATALOG: [AircraftProfile; 8] = [
    profile(DEFAULT_AIRCRAFT, 9.0, 800.0, 122.0, 5.0, 1500.0),
    profile("Twin-Engine Piston (Beechcraft Baron)", 10.0, 1500.0, 200.0, 6.0, 1800.0),
    profile("Small Business Jet (Citation CJ3)", 15.0, 2000.0, 415.0, 4.5, 3000.0),
    profile("Medium Business Jet (Gulfstream G450)", 17.0, 4350.0, 476.0, 9.0, 3500.0),
    profile("Regional Airliner (Embraer E175)", 18.0, 2200.0, 447.0, 4.5, 3500.0),
    profile("Narrow-Body Airliner (Boeing 737)", 17.0, 3400.0, 470.0, 6.0, 4000.0),
    profile("Wide-Body Airliner (Boeing 777)", 19.0, 7700.0, 490.0, 14.0, 4500.0),
    // autorotation rather than a fixed-wing glide
    profile("Helicopter (Bell 206)", 4.0, 430.0, 122.0, 3.0, 1500.0),
];

pub fn catalog() -> &'static [AircraftProfile] {
    &CATALOG
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|p| p.name)
}

/// Exact-name lookup.
pub fn find(name: &str) -> Option<&'static AircraftProfile> {
    CATALOG.iter().find(|p| p.name == name)
}

pub fn default_profile() -> &'static AircraftProfile {
    &CATALOG[0]
}

/// Lookup that falls back to the default entry for unrecognized names.
pub fn lookup(name: &str) -> &'static AircraftProfile {
    find(name).unwrap_or_else(default_profile)
}
