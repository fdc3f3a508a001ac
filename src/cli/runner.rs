//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, CreateArgs, OutputFormat};
use crate::config::ClientConfig;
use crate::droplets::{
    Droplet, DropletCreateRequest, DropletMultiCreateRequest, DropletSettings, DropletsService,
};
use crate::error::{Result, ResultExt};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write as _;
use std::fs;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.client_config()?;
        debug!(?config, "Resolved configuration");
        let service = DropletsService::from_config(&config)?;

        match &self.cli.command {
            Commands::List => {
                let droplets = service.list().await?;
                self.output_droplets(&droplets)
            }
            Commands::Get { id } => {
                let droplet = service.get(*id).await?;
                self.output_droplets(std::slice::from_ref(&droplet))
            }
            Commands::Create {
                name,
                settings,
                wait,
            } => {
                let request = DropletCreateRequest::new(name, build_settings(settings)?);
                let droplet = service.create(&request, *wait).await?;
                self.output_droplets(std::slice::from_ref(&droplet))
            }
            Commands::CreateMultiple { names, settings } => {
                let settings = build_settings(settings)?;
                let request = DropletMultiCreateRequest::new(names.iter().cloned(), settings);
                let droplets = service.create_multiple(&request).await?;
                self.output_droplets(&droplets)
            }
            Commands::Delete { id } => {
                service.delete(*id).await?;
                self.output(&json!({ "deleted": id }))
            }
            Commands::Kernels { id } => self.output(&service.kernels(*id).await?),
            Commands::Snapshots { id } => self.output(&service.snapshots(*id).await?),
            Commands::Backups { id } => self.output(&service.backups(*id).await?),
            Commands::Actions { id } => self.output(&service.actions(*id).await?),
            Commands::Neighbors { id } => {
                let droplets = service.neighbors(*id).await?;
                self.output_droplets(&droplets)
            }
        }
    }

    /// Resolve configuration: file, then flags, then environment for the token
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(api_url) = &self.cli.api_url {
            config.api_url.clone_from(api_url);
        }
        if let Some(token) = &self.cli.token {
            config.token = Some(token.clone());
        }

        let config = config.with_env_token();
        config.validate()?;
        Ok(config)
    }

    fn output_droplets(&self, droplets: &[Droplet]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => self.output(&droplets),
            OutputFormat::Pretty => {
                print!("{}", render_droplets(droplets));
                Ok(())
            }
        }
    }

    /// Output a value
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Turn create flags into request settings
fn build_settings(args: &CreateArgs) -> Result<DropletSettings> {
    let mut settings = DropletSettings::new(&args.region, &args.size, args.image.as_str());
    settings.ssh_keys = args.ssh_keys.iter().map(|k| k.as_str().into()).collect();
    settings.tags.clone_from(&args.tags);
    settings.backups = args.backups;
    settings.ipv6 = args.ipv6;
    settings.monitoring = args.monitoring;
    settings.vpc_uuid.clone_from(&args.vpc_uuid);

    if let Some(path) = &args.user_data {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read user data {}", path.display()))?;
        settings.user_data = Some(data);
    }

    Ok(settings)
}

/// One line per droplet: id, name, status, region, public and private IPv4
fn render_droplets(droplets: &[Droplet]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<24} {:<8} {:<6} {:<16} {:<16}",
        "ID", "NAME", "STATUS", "REGION", "PUBLIC IPV4", "PRIVATE IPV4"
    );
    for droplet in droplets {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:<8} {:<6} {:<16} {:<16}",
            droplet.id,
            droplet.name,
            droplet.status,
            droplet.region_slug().unwrap_or("-"),
            droplet.public_ipv4().unwrap_or("-"),
            droplet.private_ipv4().unwrap_or("-"),
        );
    }
    out
}
