// Domain layer: form/payload models, results graph and ports (interfaces).

pub mod graph;
pub mod model;
pub mod ports;
