// Domain layer: the checks the runner evaluates and what it reports back.

pub mod model;
pub mod ports;
