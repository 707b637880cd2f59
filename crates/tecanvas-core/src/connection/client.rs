//! Backend client trait.
//!
//! Defines the interface to the backend service that owns connection records
//! and proxies the TE and Canvas group listings.

use super::model::Connection;
use crate::error::Result;
use crate::group::{GroupId, GroupType};

/// An abstract client for the TE-Canvas backend.
///
/// # Failure semantics
///
/// Reads are best-effort: an implementation recovers from transport, status
/// and decode failures itself and returns an empty sequence, so a view can
/// always be assembled. Writes report transport failures only. The backend's
/// response to a write is not inspected; the next page load shows the real
/// state.
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// Lists the TE group types available for filtering.
    async fn list_group_types(&self) -> Vec<GroupType>;

    /// Lists TE groups, filtered by `group_type` when one is given.
    async fn list_groups(&self, group_type: Option<&GroupType>) -> Vec<GroupId>;

    /// Lists Canvas groups (courses).
    async fn list_canvas_groups(&self) -> Vec<GroupId>;

    /// Lists the current connections.
    async fn list_connections(&self) -> Vec<Connection>;

    /// Asks the backend to create a connection.
    ///
    /// `te_type` is the type of the TE group when the operator has one selected.
    async fn create_connection(
        &self,
        connection: &Connection,
        te_type: Option<&GroupType>,
    ) -> Result<()>;

    /// Asks the backend to delete a connection.
    async fn delete_connection(&self, connection: &Connection) -> Result<()>;
}
