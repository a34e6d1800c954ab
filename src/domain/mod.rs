// Domain layer: record models and the capability traits (ports) they satisfy.

pub mod model;
pub mod ports;
