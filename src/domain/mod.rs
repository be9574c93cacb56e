// Domain layer: the Person model and the source port. No I/O here.

pub mod model;
pub mod ports;
