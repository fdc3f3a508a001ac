//! Droplet module
//!
//! Models and operations for droplets and the resources hanging off them:
//! kernels, snapshots, backups, actions and neighbors.

mod requests;
mod service;
mod types;

pub use requests::{
    DropletCreateImage, DropletCreateRequest, DropletCreateSshKey, DropletMultiCreateRequest,
    DropletSettings,
};
pub use service::DropletsService;
pub use types::{
    Actions, Droplet, DropletIpTable, Droplets, Image, Images, InterfaceType, Kernel, Kernels,
    NetworkV4, NetworkV6, Networks, Region,
};
