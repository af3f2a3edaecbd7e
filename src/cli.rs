use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{LocatorMode, ServerConfig, SlideshowConfig};
use crate::error::{AppError, AppResult};
use crate::services::MediaService;

#[derive(Parser)]
#[command(name = "slideshow")]
#[command(author, version, about = "Local media slideshow server", long_about = None)]
pub struct Cli {
    /// Path to config.json (skips the default search locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Embed media as base64 data URIs in the catalog instead of file paths
    #[arg(long, global = true)]
    pub embed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    Serve(ServeArgs),

    /// Print the current media catalog as JSON
    Files,

    /// Load and validate the configuration, then print it
    CheckConfig,
}

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve the client from this directory instead of the embedded one
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Environment-derived settings with command line overrides applied.
    pub fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::new();
        if let Some(path) = &self.config {
            config.config_path = Some(path.clone());
        }
        if self.embed {
            config.locator = LocatorMode::DataUri;
        }
        if let Some(Commands::Serve(args)) = &self.command {
            if let Some(host) = &args.host {
                config.host = host.clone();
            }
            if let Some(port) = args.port {
                config.port = port;
            }
            if let Some(dir) = &args.static_dir {
                config.static_dir = Some(dir.clone());
            }
        }
        config
    }
}

pub fn handle_files(server_config: &ServerConfig) -> AppResult<()> {
    let slideshow = SlideshowConfig::load(&server_config.config_candidates())?;
    let media = MediaService::new(slideshow, server_config.locator);
    let files = media.list_files();
    println!("{}", to_pretty_json(&files)?);
    Ok(())
}

pub fn handle_check_config(server_config: &ServerConfig) -> AppResult<()> {
    let slideshow = SlideshowConfig::load(&server_config.config_candidates())?;
    println!("Configuration OK:");
    println!("{}", to_pretty_json(&slideshow)?);
    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "slideshow",
            "--config",
            "/tmp/slides.json",
            "serve",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
        ]);
        let config = cli.server_config();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.config_path, Some(PathBuf::from("/tmp/slides.json")));
    }

    #[test]
    fn test_embed_flag_switches_locator() {
        let cli = Cli::parse_from(["slideshow", "files", "--embed"]);
        assert!(matches!(cli.command, Some(Commands::Files)));
        assert_eq!(cli.server_config().locator, LocatorMode::DataUri);
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["slideshow"]);
        assert!(cli.command.is_none());
    }
}
