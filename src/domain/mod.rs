// Domain layer: the validated record type and the settings port. No I/O here.

pub mod model;
pub mod ports;
