use std::fmt;

use uom::si::{area::square_meter, f64::Power, power::megawatt};

use super::{Compartment, Openings};

/// Ventilation-limited heat release coefficient, MW/m^(5/2).
const VENTILATION_COEFFICIENT: f64 = 1.21;

/// Fuel-limited heat release rate per unit floor area, MW/m².
const FUEL_HRR_DENSITY: f64 = 0.25;

/// Burning regime of a compartment fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireMode {
    /// Burning rate is limited by the air supply through the openings.
    VentilationControlled,
    /// Burning rate is limited by the available fuel surface.
    FuelControlled,
}

impl FireMode {
    /// Classifies the fire and returns its peak heat release rate.
    ///
    /// The smaller of the two limits governs. Only a strictly smaller
    /// ventilation limit makes the fire ventilation-controlled, so ties are
    /// fuel-controlled.
    #[must_use]
    pub fn classify(ventilation: Power, fuel: Power) -> (Self, Power) {
        if ventilation < fuel {
            (Self::VentilationControlled, ventilation)
        } else {
            (Self::FuelControlled, fuel)
        }
    }
}

impl fmt::Display for FireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VentilationControlled => f.write_str("ventilation-controlled"),
            Self::FuelControlled => f.write_str("fuel-controlled"),
        }
    }
}

/// Heat release rate admitted by the openings, `1.21·A_w·√h_w`.
pub(super) fn ventilation_limit(openings: &Openings) -> Power {
    Power::new::<megawatt>(VENTILATION_COEFFICIENT * openings.ventilation_term())
}

/// Heat release rate supported by the fuel bed, `0.25·A_f`.
pub(super) fn fuel_limit(compartment: &Compartment) -> Power {
    Power::new::<megawatt>(FUEL_HRR_DENSITY * compartment.floor_area().get::<square_meter>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn smaller_limit_governs() {
        let small = Power::new::<megawatt>(3.0);
        let large = Power::new::<megawatt>(4.0);

        assert_eq!(
            FireMode::classify(small, large),
            (FireMode::VentilationControlled, small)
        );
        assert_eq!(
            FireMode::classify(large, small),
            (FireMode::FuelControlled, small)
        );
    }

    #[test]
    fn tie_is_fuel_controlled() {
        let q = Power::new::<megawatt>(5.0);
        assert_eq!(FireMode::classify(q, q).0, FireMode::FuelControlled);
    }

    #[test]
    fn limits_for_small_office() {
        let room = Compartment::new(
            Length::new::<meter>(5.0),
            Length::new::<meter>(4.0),
            Length::new::<meter>(2.5),
        )
        .unwrap();
        let window =
            Openings::new(1, Length::new::<meter>(1.5), Length::new::<meter>(1.5)).unwrap();

        assert_relative_eq!(fuel_limit(&room).get::<megawatt>(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(
            ventilation_limit(&window).get::<megawatt>(),
            3.334_367_912_363_601,
            epsilon = 1e-12
        );
    }

    #[test]
    fn display() {
        assert_eq!(FireMode::FuelControlled.to_string(), "fuel-controlled");
        assert_eq!(
            FireMode::VentilationControlled.to_string(),
            "ventilation-controlled"
        );
    }
}
