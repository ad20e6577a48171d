//! Environment lookup abstractions
//!
//! The resolver never touches `std::env` directly. It reads through an
//! [`EnvSource`], so the process environment can be swapped for a fixed map
//! or layered under overrides:
//! - `ProcessEnvSource`: the real process environment
//! - `MemoryEnvSource`: a fixed in-memory map
//! - `ChainEnvSource`: first-hit fallback over several sources

mod traits;
mod process;
mod memory;
mod chain;

pub use traits::EnvSource;
pub use process::ProcessEnvSource;
pub use memory::MemoryEnvSource;
pub use chain::ChainEnvSource;
