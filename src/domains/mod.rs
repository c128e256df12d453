pub mod logger;
pub mod telemetry;

pub use logger::*;
pub use telemetry::*;
