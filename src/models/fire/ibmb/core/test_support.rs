use uom::si::{
    area::square_meter,
    energy::megajoule,
    f64::{Area, Energy, Length, Time},
    length::meter,
    time::second,
};

use super::{Compartment, FireLoad, IbmbError, IbmbInput, Openings, ThermalInertia};

/// Raw scenario values in the units fire engineers quote them in.
#[derive(Debug, Clone, Copy)]
pub(super) struct Scenario {
    pub(super) compartment: [f64; 3],
    pub(super) openings: (u32, f64, f64),
    pub(super) ambient_c: f64,
    pub(super) growth_time_s: f64,
    pub(super) fuel_load_mj_m2: f64,
    pub(super) thermal_inertia: f64,
}

impl Scenario {
    pub(super) fn input(&self) -> Result<IbmbInput, IbmbError> {
        let [l, w, h] = self.compartment.map(Length::new::<meter>);
        let (count, ww, hw) = self.openings;
        Ok(IbmbInput {
            compartment: Compartment::new(l, w, h)?,
            openings: Openings::new(count, Length::new::<meter>(ww), Length::new::<meter>(hw))?,
            fire_load: FireLoad::from_celsius(
                self.ambient_c,
                Time::new::<second>(self.growth_time_s),
                Energy::new::<megajoule>(self.fuel_load_mj_m2) / Area::new::<square_meter>(1.0),
                ThermalInertia::new(self.thermal_inertia).map_err(|source| {
                    IbmbError::InvalidFireLoad {
                        parameter: "thermal inertia",
                        source,
                    }
                })?,
            )?,
        })
    }
}

/// Office with a large window; fuel-controlled with `k` below the limit.
pub(super) const OFFICE: Scenario = Scenario {
    compartment: [4.0, 4.0, 3.0],
    openings: (1, 3.2, 2.5),
    ambient_c: 20.0,
    growth_time_s: 300.0,
    fuel_load_mj_m2: 511.0,
    thermal_inertia: 1500.0,
};

/// Small room with a narrow window; ventilation-controlled.
pub(super) const SMALL_WINDOW: Scenario = Scenario {
    compartment: [5.0, 4.0, 2.5],
    openings: (1, 1.5, 1.5),
    ambient_c: 20.0,
    growth_time_s: 600.0,
    fuel_load_mj_m2: 500.0,
    thermal_inertia: 300.0,
};

/// Unit cube with a unit opening.
pub(super) const UNIT_CUBE: Scenario = Scenario {
    compartment: [1.0, 1.0, 1.0],
    openings: (1, 1.0, 1.0),
    ambient_c: 15.0,
    growth_time_s: 100.0,
    fuel_load_mj_m2: 100.0,
    thermal_inertia: 200.0,
};
