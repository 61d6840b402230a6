use std::ops::Deref;

use crate::support::{
    constraint::{Constrained, ConstraintResult, Finite, StrictlyPositive},
    units::ArealEnergy,
};
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
};

use crate::models::fire::ibmb::core::IbmbError;

/// Thermal inertia `b = √(k·ρ·c)` of the enclosure boundary, in J/(m²·s^½·K).
///
/// The half-integer time exponent cannot be represented by a `uom` quantity,
/// so the value is carried as a strictly positive `f64` in SI units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ThermalInertia(f64);

impl ThermalInertia {
    /// Constructs a thermal inertia from a value in J/(m²·s^½·K).
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Finite::new(value)?;
        Ok(Self::from_constrained(StrictlyPositive::new(value)?))
    }

    /// Constructs a thermal inertia from a pre-validated value.
    #[must_use]
    pub fn from_constrained(value: Constrained<f64, StrictlyPositive>) -> Self {
        Self(value.into_inner())
    }
}

impl Deref for ThermalInertia {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Ambient conditions, fuel, and boundary properties driving the fire.
///
/// The ambient temperature is held in degrees Celsius exactly as supplied,
/// so the curve starts at that value without a round trip through kelvin.
#[derive(Debug, Clone, Copy)]
pub struct FireLoad {
    ambient_celsius: f64,
    growth_time: Time,
    fuel_load: ArealEnergy,
    thermal_inertia: ThermalInertia,
}

impl FireLoad {
    /// Constructs a validated fire load.
    ///
    /// The growth time `t_g` is the time for the heat release rate to reach
    /// 1 MW under t-squared growth.
    ///
    /// # Errors
    ///
    /// Returns [`IbmbError::InvalidFireLoad`] if the ambient temperature is not
    /// finite, or if the growth time or fuel load density is infinite or not
    /// strictly positive.
    pub fn new(
        ambient: ThermodynamicTemperature,
        growth_time: Time,
        fuel_load: ArealEnergy,
        thermal_inertia: ThermalInertia,
    ) -> Result<Self, IbmbError> {
        Self::from_celsius(
            ambient.get::<degree_celsius>(),
            growth_time,
            fuel_load,
            thermal_inertia,
        )
    }

    /// Constructs a validated fire load from an ambient temperature in °C.
    ///
    /// The first sample of the resulting curve equals `ambient_celsius`
    /// bit for bit.
    ///
    /// # Errors
    ///
    /// Same as [`FireLoad::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use ibmb_fire::models::fire::ibmb::{FireLoad, ThermalInertia};
    /// use uom::si::{
    ///     area::square_meter,
    ///     energy::megajoule,
    ///     f64::{Area, Energy, Time},
    ///     time::second,
    /// };
    ///
    /// let load = FireLoad::from_celsius(
    ///     21.7,
    ///     Time::new::<second>(300.0),
    ///     Energy::new::<megajoule>(511.0) / Area::new::<square_meter>(1.0),
    ///     ThermalInertia::new(1500.0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(load.ambient_celsius(), 21.7);
    /// ```
    pub fn from_celsius(
        ambient_celsius: f64,
        growth_time: Time,
        fuel_load: ArealEnergy,
        thermal_inertia: ThermalInertia,
    ) -> Result<Self, IbmbError> {
        let ambient_celsius = Finite::new(ambient_celsius)
            .map_err(IbmbError::fire_load("ambient temperature"))?
            .into_inner();
        let growth_time = Finite::new(growth_time.value)
            .and_then(|_| StrictlyPositive::new(growth_time))
            .map_err(IbmbError::fire_load("growth time"))?;
        let fuel_load = Finite::new(fuel_load.value)
            .and_then(|_| StrictlyPositive::new(fuel_load))
            .map_err(IbmbError::fire_load("fuel load density"))?;

        Ok(Self {
            ambient_celsius,
            growth_time: growth_time.into_inner(),
            fuel_load: fuel_load.into_inner(),
            thermal_inertia,
        })
    }

    /// Returns the ambient temperature.
    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.ambient_celsius)
    }

    /// Returns the ambient temperature in °C, as supplied.
    #[must_use]
    pub fn ambient_celsius(&self) -> f64 {
        self.ambient_celsius
    }

    /// Returns the fire growth time constant.
    #[must_use]
    pub fn growth_time(&self) -> Time {
        self.growth_time
    }

    /// Returns the fuel load density.
    #[must_use]
    pub fn fuel_load(&self) -> ArealEnergy {
        self.fuel_load
    }

    /// Returns the boundary thermal inertia.
    #[must_use]
    pub fn thermal_inertia(&self) -> ThermalInertia {
        self.thermal_inertia
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    use uom::si::{
        area::square_meter,
        energy::megajoule,
        f64::{Area, Energy},
        thermodynamic_temperature::degree_celsius,
        time::second,
    };

    fn density(mj_per_m2: f64) -> ArealEnergy {
        Energy::new::<megajoule>(mj_per_m2) / Area::new::<square_meter>(1.0)
    }

    #[test]
    fn thermal_inertia_must_be_positive() {
        assert_eq!(*ThermalInertia::new(1500.0).unwrap(), 1500.0);
        assert!(ThermalInertia::new(0.0).is_err());
        assert!(ThermalInertia::new(-300.0).is_err());
        assert!(ThermalInertia::new(f64::NAN).is_err());
        assert_eq!(
            ThermalInertia::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }

    #[test]
    fn validates_parameters() {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let b = ThermalInertia::new(1500.0).unwrap();

        assert!(FireLoad::new(ambient, Time::new::<second>(300.0), density(511.0), b).is_ok());

        let err =
            FireLoad::new(ambient, Time::new::<second>(0.0), density(511.0), b).unwrap_err();
        assert_eq!(
            err,
            IbmbError::InvalidFireLoad {
                parameter: "growth time",
                source: ConstraintError::Zero,
            }
        );

        let err =
            FireLoad::new(ambient, Time::new::<second>(300.0), density(-1.0), b).unwrap_err();
        assert!(matches!(
            err,
            IbmbError::InvalidFireLoad {
                parameter: "fuel load density",
                source: ConstraintError::Negative,
            }
        ));

        let nan = ThermodynamicTemperature::new::<degree_celsius>(f64::NAN);
        assert!(FireLoad::new(nan, Time::new::<second>(300.0), density(511.0), b).is_err());
    }

    #[test]
    fn rejects_infinite_parameters() {
        let b = ThermalInertia::new(1500.0).unwrap();
        let tg = Time::new::<second>(300.0);

        let forever = Time::new::<second>(f64::INFINITY);
        let err = FireLoad::from_celsius(20.0, forever, density(511.0), b).unwrap_err();
        assert_eq!(
            err,
            IbmbError::InvalidFireLoad {
                parameter: "growth time",
                source: ConstraintError::NotFinite,
            }
        );

        let err = FireLoad::from_celsius(20.0, tg, density(f64::INFINITY), b).unwrap_err();
        assert_eq!(
            err,
            IbmbError::InvalidFireLoad {
                parameter: "fuel load density",
                source: ConstraintError::NotFinite,
            }
        );

        let err = FireLoad::from_celsius(f64::NEG_INFINITY, tg, density(511.0), b).unwrap_err();
        assert_eq!(
            err,
            IbmbError::InvalidFireLoad {
                parameter: "ambient temperature",
                source: ConstraintError::NotFinite,
            }
        );
    }

    #[test]
    fn keeps_ambient_celsius_as_supplied() {
        let b = ThermalInertia::new(1500.0).unwrap();
        for t0 in [21.7, 12.34, -5.3, 0.1] {
            let load =
                FireLoad::from_celsius(t0, Time::new::<second>(300.0), density(511.0), b).unwrap();
            assert_eq!(load.ambient_celsius(), t0);
        }
    }
}
