//! Compartment fire models.
//!
//! This module contains design fire models that describe gas temperatures
//! inside an enclosure, such as the iBMB parametric fire curve.

pub mod ibmb;
