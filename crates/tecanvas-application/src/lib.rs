//! Application layer for the TE-Canvas front.
//!
//! Use cases that coordinate the core domain (form interpretation, selection
//! state) with a backend client.

pub mod connection_usecase;
pub mod view_assembly;

#[cfg(test)]
mod test_support;

pub use connection_usecase::ConnectionUseCase;
pub use view_assembly::assemble_snapshot;
