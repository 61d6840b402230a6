//! Characteristic times and temperatures of the iBMB curve.
//!
//! The heat release rate grows as `(t/t_g)²` MW until it reaches the peak
//! rate at `t1`, stays at the peak until 70% of the fire load is consumed
//! at `t2`, then decays linearly to zero at `t3` while the remaining 30%
//! burns out.

use uom::si::{
    energy::megajoule,
    f64::{Energy, Power, ThermodynamicTemperature, Time},
    power::megawatt,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{FireMode, ThermalInertia};

/// Share of the fire load released before decay begins.
const PRE_DECAY_FRACTION: f64 = 0.7;

/// Fuel-controlled fires with `k` above this value use the fixed temperatures.
const K_LIMIT: f64 = 0.04;

/// Boundaries of the growth, rise, and decay phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimes {
    /// End of growth, when the heat release rate reaches its peak (`t1`).
    pub growth_end: Time,

    /// End of the fully developed phase, when decay begins (`t2`).
    pub rise_end: Time,

    /// End of decay, when the fire load is exhausted (`t3`).
    pub decay_end: Time,
}

/// Gas temperatures at the phase boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicTemperatures {
    /// Temperature at the end of growth (`T1`).
    pub growth_end: ThermodynamicTemperature,

    /// Temperature at the start of decay (`T2`).
    pub rise_end: ThermodynamicTemperature,

    /// Temperature at burnout (`T3`).
    pub decay_end: ThermodynamicTemperature,
}

/// Time at which t-squared growth reaches the peak heat release rate.
pub(super) fn growth_end(growth_time: Time, peak: Power) -> Time {
    let tg = growth_time.get::<second>();
    Time::new::<second>((tg.powi(2) * peak.get::<megawatt>()).sqrt())
}

/// Phase boundaries for burning `total_load` after growth ends at `growth_end`.
///
/// Times are not checked for ordering. A small fire load can be consumed
/// before the growth phase ends, placing `rise_end` before `growth_end`.
pub(super) fn phase_times(
    growth_end: Time,
    growth_time: Time,
    peak: Power,
    total_load: Energy,
) -> PhaseTimes {
    let t1 = growth_end.get::<second>();
    let tg = growth_time.get::<second>();
    let q_max = peak.get::<megawatt>();
    let total = total_load.get::<megajoule>();

    let growth_energy = t1.powi(3) / (3.0 * tg.powi(2));
    let steady_energy = PRE_DECAY_FRACTION * total - growth_energy;
    let decay_energy = (1.0 - PRE_DECAY_FRACTION) * total;

    let t2 = t1 + steady_energy / q_max;
    let t3 = t2 + 2.0 * decay_energy / q_max;

    PhaseTimes {
        growth_end,
        rise_end: Time::new::<second>(t2),
        decay_end: Time::new::<second>(t3),
    }
}

/// Thermal response coefficient `k = (Q² / (A_w·√h_w·A_T·b))^(1/3)`.
///
/// `ventilation_term` is `A_w·√h_w` in m^(5/2) and `net_area` is `A_T` in m²;
/// both must be strictly positive.
pub(super) fn response_coefficient(
    peak: Power,
    ventilation_term: f64,
    net_area: f64,
    thermal_inertia: ThermalInertia,
) -> f64 {
    let q_max = peak.get::<megawatt>();
    (q_max.powi(2) / (ventilation_term * net_area * *thermal_inertia)).cbrt()
}

/// Characteristic temperatures for the given regime.
///
/// `opening_factor` must be strictly positive for ventilation-controlled fires.
pub(super) fn temperatures(
    mode: FireMode,
    k: f64,
    opening_factor: f64,
    thermal_inertia: ThermalInertia,
) -> CharacteristicTemperatures {
    let celsius = ThermodynamicTemperature::new::<degree_celsius>;

    match mode {
        FireMode::FuelControlled if k <= K_LIMIT => CharacteristicTemperatures {
            growth_end: celsius(24_000.0 * k + 20.0),
            rise_end: celsius(33_000.0 * k + 20.0),
            decay_end: celsius(16_000.0 * k + 20.0),
        },
        FireMode::FuelControlled => CharacteristicTemperatures {
            growth_end: celsius(980.0),
            rise_end: celsius(1340.0),
            decay_end: celsius(660.0),
        },
        FireMode::VentilationControlled => {
            let b = *thermal_inertia;
            let o = opening_factor;
            CharacteristicTemperatures {
                growth_end: celsius(-8.75 / o - 0.1 * b + 1175.0),
                rise_end: celsius(((0.004 * b - 17.0) / o - 0.4 * b + 2175.0).min(1340.0)),
                decay_end: celsius(-5.0 / o - 0.16 * b + 1060.0),
            }
        }
    }
}
