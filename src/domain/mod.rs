// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/chrono/rust_decimal for the wire-facing types.

pub mod model;
pub mod ports;
