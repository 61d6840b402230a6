use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Energy per unit area, J/m² in SI.
///
/// Fire engineering quotes fuel load densities in MJ/m². `uom` has no
/// named quantity for this dimension, so values are built by dividing an
/// [`Energy`](uom::si::f64::Energy) by an [`Area`](uom::si::f64::Area).
pub type ArealEnergy = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
