pub mod connection;
pub mod error;
pub mod form;
pub mod group;
pub mod selection;
pub mod snapshot;

// Re-export common types
pub use connection::{BackendClient, Connection};
pub use error::TecanvasError;
pub use form::{FieldIntent, parse_add_intent, parse_delete_intent};
pub use group::{GroupId, GroupType};
pub use selection::SelectionState;
pub use snapshot::Snapshot;
