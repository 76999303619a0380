// Domain layer: the two hierarchies of the bridge and the port they emit through.
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
