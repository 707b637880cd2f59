//! Connection domain module.
//!
//! A connection links one TE group to one Canvas group. The backend owns the
//! records; this module holds the pair, its flat token form, and the client
//! contract used to read and mutate the records.
//!
//! # Module Structure
//!
//! - `model`: The `Connection` pair
//! - `token`: Encoding of a pair into a single form-field token and back
//! - `client`: Backend client trait
//!
//! # Usage
//!
//! ```ignore
//! use tecanvas_core::connection::{BackendClient, Connection, SEPARATOR};
//! ```

mod client;
mod model;
pub mod token;

// Re-export public API
pub use client::BackendClient;
pub use model::Connection;
pub use token::SEPARATOR;
