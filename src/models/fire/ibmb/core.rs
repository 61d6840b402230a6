//! Closed-form iBMB parametric fire curve.
//!
//! The fire is classified as ventilation- or fuel-controlled from the
//! compartment and opening geometry. Characteristic times follow from the
//! peak heat release rate and fire load, and characteristic temperatures
//! from the opening factor, thermal inertia, and the response coefficient
//! `k`. The curve joins them with a quadratic growth segment and two
//! square-root segments.

mod characteristic;
mod config;
mod curve;
mod error;
mod input;
mod mode;
mod results;

#[cfg(test)]
mod test_support;

pub use characteristic::{CharacteristicTemperatures, PhaseTimes};
pub use config::CurveConfig;
pub use curve::{Curve, Phase};
pub use error::IbmbError;
pub use input::{Compartment, FireLoad, IbmbInput, Openings, ThermalInertia};
pub use mode::FireMode;
pub use results::Results;

use tracing::debug;
use uom::si::{
    area::square_meter, power::megawatt, thermodynamic_temperature::degree_celsius, time::minute,
};

/// Computes the iBMB fire curve for a compartment.
///
/// # Errors
///
/// Returns [`IbmbError::InvalidGeometry`] if the openings consume the entire
/// enclosing surface, [`IbmbError::DivisionByZero`] if the openings have no
/// area, and [`IbmbError::DegenerateInterval`] or [`IbmbError::InvalidTimeStep`]
/// if the curve cannot be sampled.
pub fn calculate(input: &IbmbInput, config: &CurveConfig) -> Result<Results, IbmbError> {
    let IbmbInput {
        compartment,
        openings,
        fire_load,
    } = input;

    let net_area = openings.net_surface_area(compartment)?.into_inner();
    let opening_factor = openings.opening_factor(compartment)?;

    let (mode, peak) = FireMode::classify(
        mode::ventilation_limit(openings),
        mode::fuel_limit(compartment),
    );

    let floor_area = compartment.floor_area();
    let growth_time = fire_load.growth_time();
    let t1 = characteristic::growth_end(growth_time, peak);
    let reference_times = characteristic::phase_times(
        t1,
        growth_time,
        peak,
        config.reference_fuel_load * floor_area,
    );

    let thermal_inertia = fire_load.thermal_inertia();
    let k = characteristic::response_coefficient(
        peak,
        openings.ventilation_term(),
        net_area.get::<square_meter>(),
        thermal_inertia,
    );
    let temperatures = characteristic::temperatures(mode, k, opening_factor, thermal_inertia);

    let times = characteristic::phase_times(
        t1,
        growth_time,
        peak,
        fire_load.fuel_load() * floor_area,
    );

    debug!(
        %mode,
        peak_mw = peak.get::<megawatt>(),
        opening_factor,
        k,
        t1_min = times.growth_end.get::<minute>(),
        t2_min = times.rise_end.get::<minute>(),
        t3_min = times.decay_end.get::<minute>(),
        "classified compartment fire"
    );
    debug!(
        temp_1_c = temperatures.growth_end.get::<degree_celsius>(),
        temp_2_c = temperatures.rise_end.get::<degree_celsius>(),
        temp_3_c = temperatures.decay_end.get::<degree_celsius>(),
        "characteristic temperatures"
    );

    let curve = curve::sample(
        &times,
        &reference_times,
        &temperatures,
        fire_load.ambient_celsius(),
        config.time_step,
    )?;

    Ok(Results {
        mode,
        peak_heat_release: peak,
        opening_factor,
        response_coefficient: k,
        reference_times,
        times,
        temperatures,
        curve,
    })
}
