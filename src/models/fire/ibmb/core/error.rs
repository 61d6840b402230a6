use thiserror::Error;
use uom::si::f64::Time;

use crate::support::constraint::ConstraintError;

use super::Phase;

/// Errors that can occur while computing an iBMB fire curve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IbmbError {
    /// A compartment or opening dimension is invalid.
    ///
    /// This includes non-positive compartment dimensions, negative opening
    /// dimensions, and openings that consume the entire enclosing surface.
    #[error("invalid geometry: {quantity}")]
    InvalidGeometry {
        /// Name of the offending geometric quantity.
        quantity: &'static str,

        /// Violated numeric constraint.
        #[source]
        source: ConstraintError,
    },

    /// A fire load parameter is invalid.
    #[error("invalid fire load parameter: {parameter}")]
    InvalidFireLoad {
        /// Name of the offending parameter.
        parameter: &'static str,

        /// Violated numeric constraint.
        #[source]
        source: ConstraintError,
    },

    /// The configured sampling step is not strictly positive.
    #[error("invalid time step")]
    InvalidTimeStep(#[source] ConstraintError),

    /// A quantity would be divided by zero.
    ///
    /// Raised for zero vent area or zero opening height, which appear as
    /// divisors in the opening factor and the thermal response coefficient.
    #[error("division by zero computing {quantity}")]
    DivisionByZero {
        /// Name of the quantity whose computation divides by zero.
        quantity: &'static str,
    },

    /// A curve phase spans a zero or negative interval.
    #[error("degenerate {phase} interval: start={start:?}, end={end:?}")]
    DegenerateInterval {
        /// Phase whose interval collapsed.
        phase: Phase,

        /// Start of the interval.
        start: Time,

        /// End of the interval.
        end: Time,
    },
}

impl IbmbError {
    pub(super) fn geometry(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidGeometry { quantity, source }
    }

    pub(super) fn fire_load(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidFireLoad { parameter, source }
    }
}
