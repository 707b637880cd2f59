//! Web front for viewing and editing TE-Canvas connections.

pub mod render;
pub mod routes;

pub use routes::{AppState, router};
