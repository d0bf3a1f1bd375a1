//! HTTP implementation of the topology server API
//!
//! One method per endpoint over a blocking reqwest client. The client is
//! built without a request timeout: a hung server stalls the worker with
//! the status stuck at Processing/Loading, which is the documented behavior
//! of the original frontend (no retry policy either).

use crate::backend::api::TopologyApi;
use crate::error::{Result, TopoVisError};
use crate::types::TopologySnapshot;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Blocking HTTP client for the topology server
pub struct HttpApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpApi {
    /// Create a client for the given base address (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        Self::decode(path, response)
    }

    fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).send()?;
        Self::decode(path, response)
    }

    fn decode<T: DeserializeOwned>(path: &str, response: reqwest::blocking::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(TopoVisError::Api {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TopologyApi for HttpApi {
    fn fetch_topology(&self) -> Result<TopologySnapshot> {
        self.get_json("/api/topology")
    }

    fn toggle_link(&self, link_id: &str) -> Result<Value> {
        self.post_json(&format!("/api/links/{}/toggle", link_id))
    }

    fn set_link_up(&self, link_id: &str) -> Result<Value> {
        self.post_json(&format!("/api/links/{}/up", link_id))
    }

    fn set_link_down(&self, link_id: &str) -> Result<Value> {
        self.post_json(&format!("/api/links/{}/down", link_id))
    }

    fn fail_node(&self, node_id: &str) -> Result<Value> {
        self.post_json(&format!("/api/nodes/{}/fail", node_id))
    }

    fn recover_node(&self, node_id: &str) -> Result<Value> {
        self.post_json(&format!("/api/nodes/{}/recover", node_id))
    }

    fn reset_topology(&self) -> Result<Value> {
        self.post_json("/api/topology/reset")
    }

    fn run_scenario(&self, name: &str) -> Result<Value> {
        self.post_json(&format!("/api/test/scenario/{}", name))
    }
}
