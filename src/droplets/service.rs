//! Droplet operations
//!
//! Every listing goes through the [`Paginator`]; single-resource calls are
//! one request each.

use super::requests::{DropletCreateRequest, DropletMultiCreateRequest};
use super::types::{Actions, Droplet, Droplets, Images, Kernels};
use crate::actions::{Action, ActionSource, ActionWaiter};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{
    next_page_from, Links, Meta, Page, PageFetcher, PageRequest, Paginator,
};
use crate::types::DropletId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

const DROPLETS_PATH: &str = "/v2/droplets";

/// Any listing response: one array under a resource-specific root key plus
/// the uniform `links` / `meta` objects.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl ListEnvelope {
    fn take_items<T: DeserializeOwned>(&mut self, root: &str) -> Result<Vec<T>> {
        match self.rest.remove(root) {
            Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(Error::decode(format!("response has no '{root}' field"))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DropletRoot {
    droplet: Droplet,
    #[serde(default)]
    links: Option<Links>,
}

#[derive(Debug, Deserialize)]
struct ActionRoot {
    action: Action,
}

/// Typed access to the droplet endpoints
#[derive(Debug, Clone)]
pub struct DropletsService {
    client: HttpClient,
    paginator: Paginator,
    waiter: ActionWaiter,
}

impl DropletsService {
    pub fn new(client: HttpClient, paginator: Paginator, waiter: ActionWaiter) -> Self {
        Self {
            client,
            paginator,
            waiter,
        }
    }

    /// Build the client, paginator and waiter from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::with_auth(config.http_config(), config.auth_config()?)?;
        Ok(Self::new(
            client,
            Paginator::new(config.pagination_config()),
            ActionWaiter::new(config.wait_config()),
        ))
    }

    /// All droplets on the account
    pub async fn list(&self) -> Result<Droplets> {
        self.collect(DROPLETS_PATH.to_string(), "droplets").await
    }

    pub async fn get(&self, id: DropletId) -> Result<Droplet> {
        let root: DropletRoot = self.client.get_json(&droplet_path(id)).await?;
        Ok(root.droplet)
    }

    /// Create a droplet.
    ///
    /// With `wait`, the `create` action advertised in the response is polled
    /// to completion and the droplet is fetched again so the returned value
    /// carries its settled state (status, networks). Without a `create`
    /// action link the freshly created representation is returned as-is.
    ///
    /// A failed or timed-out wait is `Error::DropletNotSettled`, which names
    /// the droplet that now exists and wraps the cause.
    pub async fn create(&self, request: &DropletCreateRequest, wait: bool) -> Result<Droplet> {
        let root: DropletRoot = self.client.post_json(DROPLETS_PATH, request).await?;
        let droplet = root.droplet;
        info!(id = droplet.id, name = %droplet.name, "Droplet created");

        if !wait {
            return Ok(droplet);
        }

        let Some(action) = root.links.as_ref().and_then(|l| l.action("create")) else {
            debug!(id = droplet.id, "No create action advertised, not waiting");
            return Ok(droplet);
        };

        if let Err(err) = self.waiter.wait(self, &action.href).await {
            warn!(id = droplet.id, error = %err, "Droplet created but did not settle");
            return Err(Error::DropletNotSettled {
                droplet_id: droplet.id,
                source: Box::new(err),
            });
        }
        self.get(droplet.id).await
    }

    /// Create several droplets sharing one configuration
    pub async fn create_multiple(&self, request: &DropletMultiCreateRequest) -> Result<Droplets> {
        let mut envelope: ListEnvelope = self.client.post_json(DROPLETS_PATH, request).await?;
        let droplets: Droplets = envelope.take_items("droplets")?;
        info!(count = droplets.len(), "Droplets created");
        Ok(droplets)
    }

    pub async fn delete(&self, id: DropletId) -> Result<()> {
        self.client.delete(&droplet_path(id)).await?;
        info!(id, "Droplet deleted");
        Ok(())
    }

    /// Kernels available to a droplet
    pub async fn kernels(&self, id: DropletId) -> Result<Kernels> {
        self.collect(format!("{}/kernels", droplet_path(id)), "kernels")
            .await
    }

    pub async fn snapshots(&self, id: DropletId) -> Result<Images> {
        self.collect(format!("{}/snapshots", droplet_path(id)), "snapshots")
            .await
    }

    pub async fn backups(&self, id: DropletId) -> Result<Images> {
        self.collect(format!("{}/backups", droplet_path(id)), "backups")
            .await
    }

    /// Actions performed on a droplet
    pub async fn actions(&self, id: DropletId) -> Result<Actions> {
        self.collect(format!("{}/actions", droplet_path(id)), "actions")
            .await
    }

    /// Droplets running on the same physical server.
    ///
    /// The provider does not paginate this endpoint.
    pub async fn neighbors(&self, id: DropletId) -> Result<Droplets> {
        let mut envelope: ListEnvelope = self
            .client
            .get_json(&format!("{}/neighbors", droplet_path(id)))
            .await?;
        envelope.take_items("droplets")
    }

    /// Walk every page of `path`, reading items from `root`
    async fn collect<T>(&self, path: String, root: &'static str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let fetcher = ListFetcher {
            service: self,
            path: &path,
            root,
        };
        self.paginator.collect(&fetcher).await
    }

    /// Fetch one page of `path`
    async fn list_page<T>(&self, path: &str, root: &str, request: PageRequest) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let mut config = RequestConfig::new();
        for (key, value) in request.query_params() {
            config = config.query(key, value);
        }

        let mut envelope: ListEnvelope = self.client.get_json_with_config(path, config).await?;
        let items = envelope.take_items(root)?;
        let next = next_page_from(envelope.links.as_ref(), &request)?;

        if let Some(meta) = envelope.meta {
            debug!(path, page = request.page, total = meta.total, "Listing page");
        }

        Ok(Page { items, next })
    }
}

/// One listing endpoint bound to its root key
struct ListFetcher<'a> {
    service: &'a DropletsService,
    path: &'a str,
    root: &'static str,
}

#[async_trait]
impl<T> PageFetcher<T> for ListFetcher<'_>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<T>> {
        self.service.list_page(self.path, self.root, request).await
    }
}

#[async_trait]
impl ActionSource for DropletsService {
    async fn fetch_action(&self, href: &str) -> Result<Action> {
        let root: ActionRoot = self.client.get_json(href).await?;
        Ok(root.action)
    }
}

fn droplet_path(id: DropletId) -> String {
    format!("{DROPLETS_PATH}/{id}")
}
