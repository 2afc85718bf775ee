//! Remote store adapter.
//!
//! Talks to the store's PostgREST-style read API:
//! `GET {base}/rest/v1/{table}?select=*&{column}=eq.{value}&order=...`.
//! Every request carries the project `apikey`; signed-in sessions add a
//! bearer token so row-level security scopes results to the caller.
//!
//! Responses are read as text and decoded explicitly: a body that fails to
//! decode into the entity types (e.g. an out-of-enumeration status) maps to
//! [`DataError::Integrity`], never to a transport error.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use hearth_core::entities::{Customer, Milestone, Project, ProjectUpdate};

use crate::error::DataError;
use crate::repository::ProjectRepository;

/// HTTP adapter implementing [`ProjectRepository`] against the remote store.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    bearer: Option<String>,
}

impl RemoteStore {
    /// Create an adapter for an unauthenticated (anon-key-only) session.
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            bearer: None,
        }
    }

    /// Attach the signed-in session's bearer token.
    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, DataError> {
        let url = format!("{}/rest/v1/{table}?{query}", self.base_url);
        tracing::debug!(%url, "store read");

        let mut request = self.client.get(&url).header("apikey", &self.anon_key);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| DataError::Integrity(format!("{table} rows failed to decode: {e}")))
    }

    /// Maybe-single semantics: `limit=1` on the query, first row or `None`.
    async fn fetch_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Option<T>, DataError> {
        let rows = self.fetch_rows(table, query).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl ProjectRepository for RemoteStore {
    async fn customer_for_user(&self, user_id: &str) -> Result<Option<Customer>, DataError> {
        self.fetch_single("customers", &customer_for_user_query(user_id))
            .await
    }

    async fn projects_for_customer(&self, customer_id: &str) -> Result<Vec<Project>, DataError> {
        self.fetch_rows("projects", &projects_for_customer_query(customer_id))
            .await
    }

    async fn project_by_id(&self, project_id: &str) -> Result<Option<Project>, DataError> {
        self.fetch_single("projects", &project_by_id_query(project_id))
            .await
    }

    async fn milestones_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<Milestone>, DataError> {
        self.fetch_rows("milestones", &milestones_for_project_query(project_id))
            .await
    }

    async fn updates_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectUpdate>, DataError> {
        self.fetch_rows("project_updates", &updates_for_project_query(project_id))
            .await
    }
}

// --- Query builders ---
//
// Kept as free functions so the request shape is testable without a network.

fn eq_filter(column: &str, value: &str) -> String {
    format!("{column}=eq.{}", urlencoding::encode(value))
}

fn customer_for_user_query(user_id: &str) -> String {
    format!("select=*&{}&limit=1", eq_filter("user_id", user_id))
}

fn projects_for_customer_query(customer_id: &str) -> String {
    format!(
        "select=*&{}&order=created_at.desc",
        eq_filter("customer_id", customer_id)
    )
}

fn project_by_id_query(project_id: &str) -> String {
    format!("select=*&{}&limit=1", eq_filter("id", project_id))
}

fn milestones_for_project_query(project_id: &str) -> String {
    format!(
        "select=*&{}&order=order_index.asc",
        eq_filter("project_id", project_id)
    )
}

fn updates_for_project_query(project_id: &str) -> String {
    format!(
        "select=*&{}&order=created_at.desc",
        eq_filter("project_id", project_id)
    )
}
