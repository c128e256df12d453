pub mod console_logger;
pub mod file_logger;
pub mod logging;
pub mod multi_logger;
pub mod pacer;
pub mod stdout_sink;

pub use console_logger::*;
pub use file_logger::*;
pub use logging::*;
pub use multi_logger::*;
pub use pacer::*;
pub use stdout_sink::*;
