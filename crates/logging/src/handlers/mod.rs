//! Built-in [`Handler`](crate::Handler) implementations.

mod memory;
mod stream;

pub use memory::MemoryHandler;
pub use stream::StreamHandler;
