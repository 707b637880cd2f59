//! Connection use case implementation.
//!
//! Binds the form interpreter, the selection state and a backend client into
//! the operations behind the connection page: view, select type, add, delete.

use std::sync::Arc;

use tecanvas_core::error::Result;
use tecanvas_core::{
    BackendClient, Connection, GroupType, SelectionState, Snapshot, parse_add_intent,
    parse_delete_intent,
};

use crate::view_assembly::assemble_snapshot;

/// Use case for viewing and editing TE-Canvas connections.
///
/// Writes are best-effort. A failed create or delete is logged and otherwise
/// ignored; the redirect that follows every edit re-reads the backend and shows
/// whatever state it actually holds.
#[derive(Clone)]
pub struct ConnectionUseCase {
    client: Arc<dyn BackendClient>,
    selection: SelectionState,
}

impl ConnectionUseCase {
    pub fn new(client: Arc<dyn BackendClient>, selection: SelectionState) -> Self {
        Self { client, selection }
    }

    /// Builds the snapshot for one view request using the current selection.
    pub async fn snapshot(&self) -> Snapshot {
        let selected_type = self.selection.get().await;
        assemble_snapshot(self.client.as_ref(), selected_type).await
    }

    /// Sets the TE group type filter from a submitted form value.
    pub async fn select_type(&self, value: &str) -> Option<GroupType> {
        let group_type = GroupType::from_form_value(value);
        tracing::info!("[UseCase] Selected TE group type: {:?}", group_type);
        self.selection.set(group_type.clone()).await;
        group_type
    }

    /// Creates the connection described by an add submission.
    ///
    /// Fails only when the field names do not have the template's shape
    /// (`InvariantViolation`). The backend's outcome is not reported.
    pub async fn add_connection<I, S>(&self, fields: I) -> Result<Connection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let connection = parse_add_intent(fields)?;
        let te_type = self.selection.get().await;

        tracing::info!(
            "[UseCase] Adding connection {} -> {}",
            connection.te_group,
            connection.canvas_group
        );
        if let Err(e) = self
            .client
            .create_connection(&connection, te_type.as_ref())
            .await
        {
            tracing::warn!("[UseCase] Create request not delivered: {}", e);
        }

        Ok(connection)
    }

    /// Deletes every connection named in a delete submission.
    ///
    /// All tokens are decoded first; a `MalformedToken` aborts the batch before
    /// any delete is sent.
    pub async fn delete_connections<I, S>(&self, fields: I) -> Result<Vec<Connection>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let connections = parse_delete_intent(fields)?;

        for connection in &connections {
            tracing::info!(
                "[UseCase] Deleting connection {} -> {}",
                connection.te_group,
                connection.canvas_group
            );
            if let Err(e) = self.client.delete_connection(connection).await {
                tracing::warn!("[UseCase] Delete request not delivered: {}", e);
            }
        }

        Ok(connections)
    }
}
