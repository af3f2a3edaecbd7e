use anyhow::Context;
use clap::Parser;
use log::error;

use slideshow_web::cli::{self, Cli, Commands};
use slideshow_web::server;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let server_config = cli.server_config();

    match &cli.command {
        Some(Commands::Serve(_)) | None => {
            // Config problems are fatal here, before the port is bound.
            let (media, assets) = server::prepare(&server_config).inspect_err(|e| error!("{}", e))?;
            actix_web::rt::System::new()
                .block_on(server::run(server_config, media, assets))
                .context("server failed")?;
        }
        Some(Commands::Files) => cli::handle_files(&server_config)?,
        Some(Commands::CheckConfig) => cli::handle_check_config(&server_config)?,
    }
    Ok(())
}
