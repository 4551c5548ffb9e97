pub mod logging;
pub mod rect;
pub mod vec2;

pub use logging::{
    init_stdout_logger, logger_fn, FnLogger, Level, LogCrateLogger, Logger, NullLogger, StdoutLogger,
};
pub use rect::Rect;
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use lens_base::log::*
pub use log;
