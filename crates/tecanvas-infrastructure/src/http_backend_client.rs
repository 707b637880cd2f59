//! HTTP implementation of the backend client.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use tecanvas_core::error::Result;
use tecanvas_core::{BackendClient, Connection, GroupId, GroupType, TecanvasError};

use crate::config::{ApiRevision, BackendConfig};
use crate::dto::{ConnectionDto, IdEntry, Listing};

const CONNECTION_PATH: &str = "/api/connection";

/// Backend client that talks JSON over HTTP with reqwest.
#[derive(Clone)]
pub struct HttpBackendClient {
    client: Client,
    config: BackendConfig,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.config.url(path));
        match self.config.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    /// Fetches and decodes a list endpoint.
    async fn fetch_listing<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(|e| TecanvasError::transport(format!("GET {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TecanvasError::transport(format!(
                "GET {} returned {}",
                path, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TecanvasError::transport(format!("GET {} body: {}", path, e)))?;
        let listing: Listing<T> = serde_json::from_slice(&body)?;
        Ok(listing.into_items())
    }

    /// Fetches a listing and degrades to empty on any failure.
    async fn list_or_empty<T, U>(&self, what: &str, path: &str, query: &[(&str, String)]) -> Vec<U>
    where
        T: DeserializeOwned + Into<U>,
    {
        match self.fetch_listing::<T>(path, query).await {
            Ok(items) => {
                tracing::debug!("[Backend] Listed {} {}", items.len(), what);
                items.into_iter().map(Into::into).collect()
            }
            Err(e) => {
                tracing::warn!("[Backend] Failed to list {}: {}", what, e);
                Vec::new()
            }
        }
    }

    /// Sends a connection mutation. Only transport failures are reported.
    async fn send_connection(
        &self,
        method: Method,
        connection: &Connection,
        te_type: Option<&GroupType>,
    ) -> Result<()> {
        let mut query = vec![
            ("te_group", connection.te_group.as_str()),
            ("canvas_group", connection.canvas_group.as_str()),
        ];
        if let Some(te_type) = te_type {
            query.push(("te_type", te_type.as_str()));
        }

        let response = self
            .request(method.clone(), CONNECTION_PATH)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                TecanvasError::transport(format!("{} {} failed: {}", method, CONNECTION_PATH, e))
            })?;

        tracing::debug!(
            "[Backend] {} {} ({} -> {}) returned {}",
            method,
            CONNECTION_PATH,
            connection.te_group,
            connection.canvas_group,
            response.status()
        );
        Ok(())
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn list_group_types(&self) -> Vec<GroupType> {
        match self.config.revision {
            ApiRevision::Current => {
                self.list_or_empty::<IdEntry, GroupType>("group types", "/api/timeedit/types", &[])
                    .await
            }
            ApiRevision::Legacy => Vec::new(),
        }
    }

    async fn list_groups(&self, group_type: Option<&GroupType>) -> Vec<GroupId> {
        let limit = ("number_of_objects", self.config.fetch_limit.to_string());
        match self.config.revision {
            ApiRevision::Current => {
                // The backend requires `type`; an empty value lists every type.
                let group_type = group_type.map(GroupType::to_string).unwrap_or_default();
                let query = [("type", group_type), limit];
                self.list_or_empty::<IdEntry, GroupId>("TE groups", "/api/timeedit/objects", &query)
                    .await
            }
            ApiRevision::Legacy => {
                if let Some(group_type) = group_type {
                    tracing::debug!(
                        "[Backend] Legacy API cannot filter by type '{}', listing all",
                        group_type
                    );
                }
                self.list_or_empty::<IdEntry, GroupId>("TE groups", "/api/timeedit", &[limit])
                    .await
            }
        }
    }

    async fn list_canvas_groups(&self) -> Vec<GroupId> {
        let path = match self.config.revision {
            ApiRevision::Current => "/api/canvas/courses",
            ApiRevision::Legacy => "/api/canvas",
        };
        self.list_or_empty::<IdEntry, GroupId>("Canvas groups", path, &[])
            .await
    }

    async fn list_connections(&self) -> Vec<Connection> {
        self.list_or_empty::<ConnectionDto, Connection>("connections", CONNECTION_PATH, &[])
            .await
    }

    async fn create_connection(
        &self,
        connection: &Connection,
        te_type: Option<&GroupType>,
    ) -> Result<()> {
        self.send_connection(Method::POST, connection, te_type).await
    }

    async fn delete_connection(&self, connection: &Connection) -> Result<()> {
        self.send_connection(Method::DELETE, connection, None).await
    }
}
