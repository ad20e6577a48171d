//! Logging abstractions
//!
//! The core never writes to a sink directly. Callers hand the provider a
//! [`SharedLogger`] and decide where messages go.

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{MemoryLogger, LogRecord};
