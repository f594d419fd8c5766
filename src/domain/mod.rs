// Domain layer: event models and the extractor ports the transformer depends on.

pub mod model;
pub mod ports;
