// Domain layer: core models and ports (interfaces). No dependencies on the
// engine or any adapter.

pub mod model;
pub mod ports;
