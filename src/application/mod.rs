pub mod transmission_service;

pub use transmission_service::*;
