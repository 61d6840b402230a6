use crate::support::constraint::{Constrained, Finite, StrictlyPositive};
use uom::si::f64::{Area, Length};

use crate::models::fire::ibmb::core::IbmbError;

/// Rectangular fire compartment.
///
/// Each dimension is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct Compartment {
    length: Length,
    width: Length,
    height: Length,
}

impl Compartment {
    /// Constructs a validated compartment.
    ///
    /// # Errors
    ///
    /// Returns [`IbmbError::InvalidGeometry`] if any dimension is not strictly
    /// positive or is infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use ibmb_fire::models::fire::ibmb::Compartment;
    /// use uom::si::{area::square_meter, f64::Length, length::meter};
    ///
    /// let room = Compartment::new(
    ///     Length::new::<meter>(4.0),
    ///     Length::new::<meter>(4.0),
    ///     Length::new::<meter>(3.0),
    /// )
    /// .unwrap();
    /// assert_eq!(room.floor_area().get::<square_meter>(), 16.0);
    /// assert_eq!(room.surface_area().get::<square_meter>(), 80.0);
    /// ```
    pub fn new(length: Length, width: Length, height: Length) -> Result<Self, IbmbError> {
        let dimension = |value: Length, quantity: &'static str| {
            Finite::new(value.value)
                .and_then(|_| StrictlyPositive::new(value))
                .map_err(IbmbError::geometry(quantity))
        };
        Ok(Self::from_constrained(
            dimension(length, "compartment length")?,
            dimension(width, "compartment width")?,
            dimension(height, "compartment height")?,
        ))
    }

    /// Constructs a compartment from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        length: Constrained<Length, StrictlyPositive>,
        width: Constrained<Length, StrictlyPositive>,
        height: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            length: length.into_inner(),
            width: width.into_inner(),
            height: height.into_inner(),
        }
    }

    /// Returns the compartment length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the compartment width.
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Returns the compartment height.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Returns the floor area.
    #[must_use]
    pub fn floor_area(&self) -> Area {
        self.length * self.width
    }

    /// Returns the total internal surface area (floor, ceiling, and walls).
    ///
    /// Openings are not subtracted.
    #[must_use]
    pub fn surface_area(&self) -> Area {
        (self.floor_area() + self.length * self.height + self.width * self.height) * 2.0
    }
}
