// Domain layer: target table, output models and ports.

pub mod model;
pub mod ports;
