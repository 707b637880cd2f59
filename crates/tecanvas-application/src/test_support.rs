//! In-memory backend client for use case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tecanvas_core::error::Result;
use tecanvas_core::{BackendClient, Connection, GroupId, GroupType, TecanvasError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListGroupTypes,
    ListGroups(Option<GroupType>),
    ListCanvasGroups,
    ListConnections,
    Create(Connection, Option<GroupType>),
    Delete(Connection),
}

/// Serves canned listings and records every call made to it.
#[derive(Default)]
pub struct RecordingClient {
    group_types: Vec<GroupType>,
    groups: Vec<GroupId>,
    canvas_groups: Vec<GroupId>,
    connections: Vec<Connection>,
    connections_fail: bool,
    writes_fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_types(mut self, types: &[&str]) -> Self {
        self.group_types = types.iter().map(|t| GroupType::new(*t)).collect();
        self
    }

    pub fn with_groups(mut self, ids: &[&str]) -> Self {
        self.groups = ids.iter().map(|id| GroupId::from(*id)).collect();
        self
    }

    pub fn with_canvas_groups(mut self, ids: &[&str]) -> Self {
        self.canvas_groups = ids.iter().map(|id| GroupId::from(*id)).collect();
        self
    }

    pub fn with_connections(mut self, pairs: &[(&str, &str)]) -> Self {
        self.connections = pairs
            .iter()
            .map(|(te, canvas)| Connection::new(*te, *canvas))
            .collect();
        self
    }

    /// Makes the connection listing behave like a failed read.
    pub fn failing_connections(mut self) -> Self {
        self.connections_fail = true;
        self
    }

    /// Makes every write report a transport failure.
    pub fn failing_writes(mut self) -> Self {
        self.writes_fail = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<()> {
        if self.writes_fail {
            Err(TecanvasError::transport("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BackendClient for RecordingClient {
    async fn list_group_types(&self) -> Vec<GroupType> {
        self.record(Call::ListGroupTypes);
        self.group_types.clone()
    }

    async fn list_groups(&self, group_type: Option<&GroupType>) -> Vec<GroupId> {
        self.record(Call::ListGroups(group_type.cloned()));
        self.groups.clone()
    }

    async fn list_canvas_groups(&self) -> Vec<GroupId> {
        self.record(Call::ListCanvasGroups);
        self.canvas_groups.clone()
    }

    async fn list_connections(&self) -> Vec<Connection> {
        self.record(Call::ListConnections);
        if self.connections_fail {
            Vec::new()
        } else {
            self.connections.clone()
        }
    }

    async fn create_connection(
        &self,
        connection: &Connection,
        te_type: Option<&GroupType>,
    ) -> Result<()> {
        self.record(Call::Create(connection.clone(), te_type.cloned()));
        self.write_result()
    }

    async fn delete_connection(&self, connection: &Connection) -> Result<()> {
        self.record(Call::Delete(connection.clone()));
        self.write_result()
    }
}
