// Domain layer: value objects and the dataset port. No I/O here.

pub mod model;
pub mod ports;
