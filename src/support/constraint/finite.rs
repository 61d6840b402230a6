use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// The ordering constraints accept `+∞`, so inputs that feed closed-form
/// arithmetic pair them with this check.
/// A `uom` quantity is checked through its SI `value`.
///
/// # Examples
///
/// ```
/// use ibmb_fire::support::constraint::Finite;
/// use uom::si::{f64::Length, length::meter};
///
/// assert!(Finite::new(Length::new::<meter>(4.0).value).is_ok());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<f64, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new(value: f64) -> Result<Constrained<f64, Finite>, ConstraintError> {
        Constrained::<f64, Finite>::new(value)
    }
}

impl Constraint<f64> for Finite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::NotFinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_values_pass() {
        assert_eq!(Finite::new(-5.3).unwrap().into_inner(), -5.3);
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(f64::MAX).is_ok());
    }

    #[test]
    fn rejects_infinities_and_nan() {
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(Finite::new(f64::NEG_INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
