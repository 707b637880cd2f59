//! Assembly of the view snapshot.

use tecanvas_core::{BackendClient, GroupType, Snapshot};

/// Gathers everything the connection page shows.
///
/// The four reads are independent and run concurrently. Each read already
/// degrades to empty on failure, so this always yields a complete snapshot.
/// Nothing is cached; every view request calls this again.
pub async fn assemble_snapshot(
    client: &dyn BackendClient,
    selected_type: Option<GroupType>,
) -> Snapshot {
    let (group_types, groups, canvas_groups, connections) = tokio::join!(
        client.list_group_types(),
        client.list_groups(selected_type.as_ref()),
        client.list_canvas_groups(),
        client.list_connections(),
    );

    tracing::debug!(
        "[View] Snapshot: {} types, {} TE groups, {} Canvas groups, {} connections",
        group_types.len(),
        groups.len(),
        canvas_groups.len(),
        connections.len()
    );

    Snapshot {
        group_types,
        selected_type,
        groups,
        canvas_groups,
        connections,
    }
}
