use crate::support::constraint::{Constrained, Finite, NonNegative, StrictlyPositive};
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::models::fire::ibmb::core::IbmbError;

use super::Compartment;

/// Identical rectangular ventilation openings in the compartment walls.
///
/// Opening dimensions are guaranteed to be non-negative.
/// Zero-sized openings are representable so that calculations relying on
/// them can report [`IbmbError::DivisionByZero`].
#[derive(Debug, Clone, Copy)]
pub struct Openings {
    count: u32,
    width: Length,
    height: Length,
}

impl Openings {
    /// Constructs validated openings.
    ///
    /// # Errors
    ///
    /// Returns [`IbmbError::InvalidGeometry`] if the width or height is negative,
    /// infinite, or not a number.
    pub fn new(count: u32, width: Length, height: Length) -> Result<Self, IbmbError> {
        let dimension = |value: Length, quantity: &'static str| {
            Finite::new(value.value)
                .and_then(|_| NonNegative::new(value))
                .map_err(IbmbError::geometry(quantity))
        };
        Ok(Self::from_constrained(
            count,
            dimension(width, "opening width")?,
            dimension(height, "opening height")?,
        ))
    }

    /// Constructs openings from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        count: u32,
        width: Constrained<Length, NonNegative>,
        height: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            count,
            width: width.into_inner(),
            height: height.into_inner(),
        }
    }

    /// Returns the number of openings.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the width of a single opening.
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Returns the height of a single opening.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Returns the total vent area of all openings.
    #[must_use]
    pub fn area(&self) -> Area {
        self.height * self.width * f64::from(self.count)
    }

    /// Returns `A_w·√h_w` in m^(5/2).
    ///
    /// Both the ventilation-limited heat release rate and the opening factor
    /// scale with this term.
    #[must_use]
    pub fn ventilation_term(&self) -> f64 {
        self.area().get::<square_meter>() * self.height.get::<meter>().sqrt()
    }

    /// Returns the opening factor `A_w·√h_w / A_t` in m^½.
    ///
    /// `A_t` is the total enclosing surface area, openings included.
    ///
    /// # Errors
    ///
    /// Returns [`IbmbError::DivisionByZero`] if the openings have no area or no
    /// height, since the opening factor divides the characteristic temperatures
    /// of a ventilation-controlled fire.
    pub fn opening_factor(&self, compartment: &Compartment) -> Result<f64, IbmbError> {
        let term = StrictlyPositive::new(self.ventilation_term()).map_err(|_| {
            IbmbError::DivisionByZero {
                quantity: "opening factor",
            }
        })?;
        Ok(term.into_inner() / compartment.surface_area().get::<square_meter>())
    }

    /// Returns the enclosing surface area net of openings.
    ///
    /// # Errors
    ///
    /// Returns [`IbmbError::InvalidGeometry`] if the openings consume the entire
    /// enclosing surface.
    pub fn net_surface_area(
        &self,
        compartment: &Compartment,
    ) -> Result<Constrained<Area, StrictlyPositive>, IbmbError> {
        StrictlyPositive::new(compartment.surface_area() - self.area())
            .map_err(IbmbError::geometry("net surface area"))
    }
}
