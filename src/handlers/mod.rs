//! Handler implementations

pub mod console;
pub mod file;
pub mod rotating_file;

pub use console::{ConsoleHandler, ConsoleTarget};
pub use file::FileHandler;
pub use rotating_file::RotatingFileHandler;

pub use crate::core::Handler;
