// Domain layer: deal models and ports (interfaces) the pipeline is built on.

pub mod model;
pub mod ports;
