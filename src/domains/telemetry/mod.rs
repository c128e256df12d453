pub mod collar;
pub mod data_point;
pub mod ports;

pub use collar::*;
pub use data_point::*;
pub use ports::*;
