mod compartment;
mod fire_load;
mod openings;

pub use compartment::Compartment;
pub use fire_load::{FireLoad, ThermalInertia};
pub use openings::Openings;

/// Complete set of inputs for an iBMB fire curve calculation.
#[derive(Debug, Clone, Copy)]
pub struct IbmbInput {
    /// Enclosure dimensions.
    pub compartment: Compartment,

    /// Ventilation openings in the enclosure walls.
    pub openings: Openings,

    /// Ambient conditions, fuel, and boundary material properties.
    pub fire_load: FireLoad,
}
