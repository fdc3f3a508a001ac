//! Droplet resource types
//!
//! Only the fields this client reads or displays are modeled; unknown fields
//! are ignored on deserialization.

use crate::actions::Action;
use crate::types::DropletId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A virtual machine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    pub id: DropletId,
    pub name: String,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub vcpus: u32,
    #[serde(default)]
    pub disk: u64,
    #[serde(default)]
    pub locked: bool,
    /// `new`, `active`, `off` or `archive`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub backup_ids: Vec<u64>,
    #[serde(default)]
    pub snapshot_ids: Vec<u64>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub size_slug: String,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub kernel: Option<Kernel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub vpc_uuid: Option<String>,
}

/// Network interface kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Public,
    Private,
}

impl InterfaceType {
    fn from_network_type(kind: &str) -> Option<Self> {
        match kind {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// IPv4 address per interface kind
pub type DropletIpTable = HashMap<InterfaceType, String>;

/// Networks attached to a droplet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: u32,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: String,
}

impl Droplet {
    /// IPv4 address of each interface kind.
    ///
    /// Networks of other kinds are skipped. If the provider lists several
    /// addresses of one kind the last one wins.
    pub fn ips(&self) -> DropletIpTable {
        let mut table = DropletIpTable::new();
        for network in &self.networks.v4 {
            if let Some(kind) = InterfaceType::from_network_type(&network.network_type) {
                table.insert(kind, network.ip_address.clone());
            }
        }
        table
    }

    /// First public IPv4 address
    pub fn public_ipv4(&self) -> Option<&str> {
        self.first_v4("public")
    }

    /// First private IPv4 address
    pub fn private_ipv4(&self) -> Option<&str> {
        self.first_v4("private")
    }

    /// First public IPv6 address
    pub fn public_ipv6(&self) -> Option<&str> {
        self.networks
            .v6
            .iter()
            .find(|n| n.network_type == "public")
            .map(|n| n.ip_address.as_str())
    }

    fn first_v4(&self, kind: &str) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|n| n.network_type == kind)
            .map(|n| n.ip_address.as_str())
    }

    /// Region slug, if the region was returned
    pub fn region_slug(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.slug.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// A kernel available to a droplet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// A snapshot, backup or distribution image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub image_type: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub min_disk_size: u64,
    #[serde(default)]
    pub size_gigabytes: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

/// A datacenter region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub available: bool,
}

pub type Droplets = Vec<Droplet>;
pub type Kernels = Vec<Kernel>;
pub type Images = Vec<Image>;
pub type Actions = Vec<Action>;
