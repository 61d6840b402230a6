use uom::si::{
    area::square_meter,
    energy::megajoule,
    f64::{Area, Energy, Time},
    time::minute,
};

use crate::support::units::ArealEnergy;

/// Calculation settings for the iBMB fire curve.
#[derive(Debug, Clone, Copy)]
pub struct CurveConfig {
    /// Spacing between consecutive curve samples.
    pub time_step: Time,

    /// Fuel load density used to derive the geometry-only anchor times.
    ///
    /// The rise phase interpolates between anchors computed with this load,
    /// independent of the actual fuel load of the scenario.
    pub reference_fuel_load: ArealEnergy,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<minute>(0.1),
            reference_fuel_load: Energy::new::<megajoule>(1300.0)
                / Area::new::<square_meter>(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = CurveConfig::default();
        let load: Energy = config.reference_fuel_load * Area::new::<square_meter>(1.0);

        assert_relative_eq!(config.time_step.get::<minute>(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(load.get::<megajoule>(), 1300.0, epsilon = 1e-9);
    }
}
