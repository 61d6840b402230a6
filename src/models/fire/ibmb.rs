//! iBMB parametric compartment fire.
//!
//! This module provides a [`twine_core::Model`] implementation of the iBMB
//! temperature-time curve, along with [`compute`] for callers holding plain
//! scalars. The computational core is in the internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use ibmb_fire::models::fire::ibmb::compute;
//!
//! let curve = compute(4.0, 4.0, 3.0, 1, 3.2, 2.5, 20.0, 300.0, 511.0, 1500.0).unwrap();
//!
//! assert_eq!(curve.times().len(), curve.temperatures().len());
//! assert_eq!(curve.times()[0], 0.0);
//! assert_eq!(curve.temperatures()[0], 20.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    CharacteristicTemperatures, Compartment, Curve, CurveConfig, FireLoad, FireMode, IbmbError,
    IbmbInput, Openings, Phase, PhaseTimes, Results, ThermalInertia,
};

use twine_core::Model;
use uom::si::{
    area::square_meter,
    energy::megajoule,
    f64::{Area, Energy, Length, Time},
    length::meter,
    time::second,
};

/// iBMB fire curve model.
///
/// Maps an [`IbmbInput`] to the fire classification, characteristic points,
/// and sampled curve in [`Results`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IbmbFire {
    config: CurveConfig,
}

impl IbmbFire {
    /// Creates a model with the given calculation settings.
    #[must_use]
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    /// Returns the calculation settings.
    #[must_use]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }
}

impl Model for IbmbFire {
    type Input = IbmbInput;
    type Output = Results;
    type Error = IbmbError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::calculate(input, &self.config)
    }
}

#[cfg(feature = "plot")]
impl Curve {
    /// Draws the curve as a temperature-time chart.
    ///
    /// Returns the path of the image written, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`](crate::support::plot::RenderError) if the
    /// chart cannot be drawn or written.
    pub fn render(
        &self,
        options: &crate::support::plot::RenderOptions,
    ) -> Result<Option<std::path::PathBuf>, crate::support::plot::RenderError> {
        use crate::support::plot::{ChartLabels, render_line};

        let labels = ChartLabels {
            title: "IBMB Fire Temperature-Time Curve",
            x: "Time (min)",
            y: "Temperature (°C)",
        };
        render_line(self.times(), self.temperatures(), &labels, options)
    }
}

/// Computes the iBMB curve from scalar inputs with the default settings.
///
/// | Argument | Meaning | Unit |
/// |---|---|---|
/// | `lc`, `wc`, `hc` | compartment length, width, height | m |
/// | `nw` | number of openings | - |
/// | `ww`, `hw` | width and height of each opening | m |
/// | `t0` | ambient temperature | °C |
/// | `tg` | fire growth time | s |
/// | `q` | fuel load density | MJ/m² |
/// | `b` | boundary thermal inertia | J/(m²·s^½·K) |
///
/// # Errors
///
/// Returns [`IbmbError::InvalidGeometry`] or [`IbmbError::InvalidFireLoad`]
/// for inputs outside their valid ranges, and the errors of
/// [`IbmbFire`] for inputs that cannot produce a curve.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    lc: f64,
    wc: f64,
    hc: f64,
    nw: u32,
    ww: f64,
    hw: f64,
    t0: f64,
    tg: f64,
    q: f64,
    b: f64,
) -> Result<Curve, IbmbError> {
    let thermal_inertia =
        ThermalInertia::new(b).map_err(|source| IbmbError::InvalidFireLoad {
            parameter: "thermal inertia",
            source,
        })?;

    let input = IbmbInput {
        compartment: Compartment::new(
            Length::new::<meter>(lc),
            Length::new::<meter>(wc),
            Length::new::<meter>(hc),
        )?,
        openings: Openings::new(nw, Length::new::<meter>(ww), Length::new::<meter>(hw))?,
        fire_load: FireLoad::from_celsius(
            t0,
            Time::new::<second>(tg),
            Energy::new::<megajoule>(q) / Area::new::<square_meter>(1.0),
            thermal_inertia,
        )?,
    };

    IbmbFire::default().call(&input).map(|results| results.curve)
}
