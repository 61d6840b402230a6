//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Extensions to [`uom`].
//! - `plot`: Line chart rendering (requires the `plot` feature).

pub mod constraint;
#[cfg(feature = "plot")]
pub mod plot;
pub mod units;
