//! Droplet creation requests

use serde::{Deserialize, Serialize};

/// Image to boot from: a public slug or a private image id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropletCreateImage {
    Id(u64),
    Slug(String),
}

impl From<&str> for DropletCreateImage {
    /// Numeric strings are image ids, anything else is a slug
    fn from(value: &str) -> Self {
        value
            .parse()
            .map_or_else(|_| Self::Slug(value.to_string()), Self::Id)
    }
}

impl From<u64> for DropletCreateImage {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

/// SSH key to embed: by id or by fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropletCreateSshKey {
    Id(u64),
    Fingerprint(String),
}

impl From<&str> for DropletCreateSshKey {
    fn from(value: &str) -> Self {
        value
            .parse()
            .map_or_else(|_| Self::Fingerprint(value.to_string()), Self::Id)
    }
}

impl From<u64> for DropletCreateSshKey {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

/// Settings shared by single and multi create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletSettings {
    pub region: String,
    pub size: String,
    pub image: DropletCreateImage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<DropletCreateSshKey>,
    #[serde(default)]
    pub backups: bool,
    #[serde(default)]
    pub ipv6: bool,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

impl DropletSettings {
    pub fn new(
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<DropletCreateImage>,
    ) -> Self {
        Self {
            region: region.into(),
            size: size.into(),
            image: image.into(),
            ssh_keys: Vec::new(),
            backups: false,
            ipv6: false,
            monitoring: false,
            user_data: None,
            volumes: Vec::new(),
            tags: Vec::new(),
            vpc_uuid: None,
        }
    }
}

/// Request to create one droplet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletCreateRequest {
    pub name: String,
    #[serde(flatten)]
    pub settings: DropletSettings,
}

impl DropletCreateRequest {
    pub fn new(name: impl Into<String>, settings: DropletSettings) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    #[must_use]
    pub fn ssh_key(mut self, key: impl Into<DropletCreateSshKey>) -> Self {
        self.settings.ssh_keys.push(key.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.settings.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn user_data(mut self, user_data: impl Into<String>) -> Self {
        self.settings.user_data = Some(user_data.into());
        self
    }
}

/// Request to create several identically configured droplets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletMultiCreateRequest {
    pub names: Vec<String>,
    #[serde(flatten)]
    pub settings: DropletSettings,
}

impl DropletMultiCreateRequest {
    pub fn new<I, S>(names: I, settings: DropletSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            settings,
        }
    }
}
