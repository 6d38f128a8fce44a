//! Per-variable value models keyed by latitude, depth, day of year, and
//! region. Deterministic in shape, stochastically perturbed.

use ofq_core::variable::VariableId;
use rand::Rng;
use std::f64::consts::PI;

/// Mixed layer bottom: isothermal above this depth.
pub const MIXED_LAYER_DEPTH: f64 = 50.0;
/// Thermocline bottom: linear temperature decay between the mixed layer
/// and this depth, slow decay below.
pub const THERMOCLINE_DEPTH: f64 = 200.0;

/// Regional parameter offsets selected by region name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalParams {
    /// Added to the latitude baseline temperature, in °C.
    pub temperature_offset: f64,
    /// Baseline salinity in PSU.
    pub salinity_base: f64,
    /// Surface dissolved oxygen in µmol/kg.
    pub surface_oxygen: f64,
}

impl RegionalParams {
    /// Parameters for a named region. Tropical enclosed seas run warmer;
    /// the Bay of Bengal is freshened by river discharge while the
    /// Arabian Sea is saltier from evaporation.
    pub fn for_region(region_name: &str) -> RegionalParams {
        match region_name {
            "Bay of Bengal" => RegionalParams {
                temperature_offset: 2.0,
                salinity_base: 33.5,
                surface_oxygen: 250.0,
            },
            "Arabian Sea" => RegionalParams {
                temperature_offset: 1.0,
                salinity_base: 36.5,
                surface_oxygen: 250.0,
            },
            _ => RegionalParams {
                temperature_offset: 0.0,
                salinity_base: 35.0,
                surface_oxygen: 280.0,
            },
        }
    }
}

/// Sample one value for a variable at the given position in space and
/// calendar. Unknown variables fall back to a uniform draw in a fixed
/// range rather than failing.
pub fn sample_value<R: Rng>(
    variable: VariableId,
    latitude: f64,
    depth: f64,
    day_of_year: u32,
    params: RegionalParams,
    rng: &mut R,
) -> f64 {
    match variable {
        VariableId::Temperature => temperature(latitude, depth, day_of_year, params, rng),
        VariableId::Salinity => salinity(depth, params, rng),
        VariableId::Pressure => pressure(depth),
        VariableId::Oxygen => oxygen(depth, params, rng),
        VariableId::Chlorophyll => chlorophyll(depth, rng),
        // no dedicated model for the remaining variables
        _ => rng.gen_range(0.0..100.0),
    }
}

fn temperature<R: Rng>(
    latitude: f64,
    depth: f64,
    day_of_year: u32,
    params: RegionalParams,
    rng: &mut R,
) -> f64 {
    let base = 30.0 - latitude.abs() * 0.7 + params.temperature_offset;
    let seasonal = 3.0 * (2.0 * PI * day_of_year as f64 / 365.0).sin();
    let depth_effect = if depth < MIXED_LAYER_DEPTH {
        0.0
    } else if depth < THERMOCLINE_DEPTH {
        -(depth - MIXED_LAYER_DEPTH) * 0.15
    } else {
        -22.5 - (depth - THERMOCLINE_DEPTH) * 0.01
    };
    let value = base + seasonal + depth_effect + rng.gen_range(-1.0..1.0);
    value.clamp(0.0, 35.0)
}

fn salinity<R: Rng>(depth: f64, params: RegionalParams, rng: &mut R) -> f64 {
    let mut base = params.salinity_base;
    if depth > 1000.0 {
        base += 0.2;
    }
    (base + rng.gen_range(-0.5..0.5)).clamp(30.0, 40.0)
}

/// Hydrostatic approximation: roughly one decibar per meter on top of
/// sea-level pressure.
fn pressure(depth: f64) -> f64 {
    1013.25 + depth * 0.1
}

fn oxygen<R: Rng>(depth: f64, params: RegionalParams, rng: &mut R) -> f64 {
    let surface = params.surface_oxygen;
    let value = if depth < 100.0 {
        surface + rng.gen_range(-20.0..10.0)
    } else if depth < 500.0 {
        // oxygen minimum zone
        surface * 0.3 + rng.gen_range(-10.0..10.0)
    } else {
        surface * 0.5 + rng.gen_range(-15.0..15.0)
    };
    value.max(0.0)
}

fn chlorophyll<R: Rng>(depth: f64, rng: &mut R) -> f64 {
    let value: f64 = if depth < 10.0 {
        0.5 + rng.gen_range(-0.2..0.8)
    } else if depth < 100.0 {
        0.2 + rng.gen_range(-0.1..0.3)
    } else {
        0.05 + rng.gen_range(-0.02..0.05)
    };
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::{sample_value, RegionalParams};
    use ofq_core::variable::VariableId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_regional_params() {
        let bob = RegionalParams::for_region("Bay of Bengal");
        assert_eq!(bob.salinity_base, 33.5);
        let arabian = RegionalParams::for_region("Arabian Sea");
        assert_eq!(arabian.salinity_base, 36.5);
        let global = RegionalParams::for_region("Global Ocean");
        assert_eq!(global.salinity_base, 35.0);
        assert_eq!(global.surface_oxygen, 280.0);
    }

    #[test]
    fn test_temperature_bounds_and_cooling() {
        let mut rng = rng();
        let params = RegionalParams::for_region("Bay of Bengal");
        for day in [1, 90, 180, 270, 360] {
            let shallow =
                sample_value(VariableId::Temperature, 15.0, 10.0, day, params, &mut rng);
            let deep = sample_value(VariableId::Temperature, 15.0, 400.0, day, params, &mut rng);
            assert!((0.0..=35.0).contains(&shallow));
            assert!((0.0..=35.0).contains(&deep));
            assert!(deep <= shallow, "deep {deep} warmer than shallow {shallow}");
        }
    }

    #[test]
    fn test_salinity_bounds() {
        let mut rng = rng();
        for region in ["Bay of Bengal", "Arabian Sea", "Global Ocean"] {
            let params = RegionalParams::for_region(region);
            let value = sample_value(VariableId::Salinity, 10.0, 100.0, 100, params, &mut rng);
            assert!((30.0..=40.0).contains(&value));
        }
    }

    #[test]
    fn test_pressure_is_linear_in_depth() {
        let mut rng = rng();
        let params = RegionalParams::for_region("Global Ocean");
        let surface = sample_value(VariableId::Pressure, 0.0, 0.0, 1, params, &mut rng);
        let at_depth = sample_value(VariableId::Pressure, 0.0, 300.0, 1, params, &mut rng);
        assert_eq!(surface, 1013.25);
        assert_eq!(at_depth, 1013.25 + 30.0);
    }

    #[test]
    fn test_oxygen_minimum_zone() {
        let mut rng = rng();
        let params = RegionalParams::for_region("Arabian Sea");
        let surface = sample_value(VariableId::Oxygen, 10.0, 20.0, 100, params, &mut rng);
        let omz = sample_value(VariableId::Oxygen, 10.0, 300.0, 100, params, &mut rng);
        assert!(surface >= 0.0 && omz >= 0.0);
        assert!(omz < surface);
    }

    #[test]
    fn test_chlorophyll_never_negative() {
        let mut rng = rng();
        let params = RegionalParams::for_region("Global Ocean");
        for depth in [2.0, 50.0, 400.0] {
            let value =
                sample_value(VariableId::Chlorophyll, 0.0, depth, 200, params, &mut rng);
            assert!((0.0..2.0).contains(&value));
        }
    }

    #[test]
    fn test_unknown_variable_fallback_range() {
        let mut rng = rng();
        let params = RegionalParams::for_region("Global Ocean");
        for variable in [VariableId::Nitrate, VariableId::Ph, VariableId::Density] {
            let value = sample_value(variable, 0.0, 100.0, 1, params, &mut rng);
            assert!((0.0..100.0).contains(&value));
        }
    }
}
