//! Results types for iBMB fire curve calculations.

use uom::si::f64::Power;

use super::{CharacteristicTemperatures, Curve, FireMode, PhaseTimes};

/// Fire classification, characteristic points, and sampled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Burning regime.
    pub mode: FireMode,

    /// Peak heat release rate, the smaller of the ventilation and fuel limits.
    pub peak_heat_release: Power,

    /// Opening factor `A_w·√h_w / A_t`, in m^½.
    pub opening_factor: f64,

    /// Thermal response coefficient `k`.
    pub response_coefficient: f64,

    /// Phase boundaries for the reference fire load.
    ///
    /// The rise phase of the curve interpolates against these anchors.
    pub reference_times: PhaseTimes,

    /// Phase boundaries for the actual fire load, spanning the curve.
    pub times: PhaseTimes,

    /// Temperatures at the phase boundaries.
    pub temperatures: CharacteristicTemperatures,

    /// Sampled temperature-time curve.
    pub curve: Curve,
}
