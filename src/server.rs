use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use log::info;
use std::time::Instant;

use crate::config::{ServerConfig, SlideshowConfig};
use crate::error::AppResult;
use crate::handlers;
use crate::services::{AssetService, MediaService};

/// Load the slideshow config and build the shared services. Fails before any
/// socket is bound if the config is missing or invalid.
pub fn prepare(server_config: &ServerConfig) -> AppResult<(MediaService, AssetService)> {
    let slideshow = SlideshowConfig::load(&server_config.config_candidates())?;
    let media = MediaService::new(slideshow, server_config.locator);
    let assets = AssetService::new(server_config.static_dir.clone());
    Ok((media, assets))
}

pub async fn run(
    server_config: ServerConfig,
    media: MediaService,
    assets: AssetService,
) -> std::io::Result<()> {
    let host = server_config.host.clone();
    let port = server_config.port;

    print_banner(&host, port);
    info!("Serving media from: {}", media.config().folder_path.display());
    info!("Media locator mode: {:?}", media.locator());
    match &server_config.static_dir {
        Some(dir) => info!("Serving client from: {}", dir.display()),
        None => info!("Serving embedded client"),
    }

    let startup_time = Instant::now();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .app_data(web::Data::new(media.clone()))
            .app_data(web::Data::new(assets.clone()))
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    info!("Server stopped. Uptime: {:?}", startup_time.elapsed());
    Ok(())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/config", web::get().to(handlers::get_config))
            .route("/files", web::get().to(handlers::list_files))
            .route("/files/{name}", web::get().to(handlers::describe_file)),
    )
    .route("/media/{name:.*}", web::get().to(handlers::serve_media))
    .route("/healthz", web::get().to(|| async { "OK" }))
    .route("/{path:.*}", web::get().to(handlers::serve_static));
}

fn print_banner(host: &str, port: u16) {
    let banner = r#"
 ____  _ _     _           _
/ ___|| (_) __| | ___  ___| |__   _____      __
\___ \| | |/ _` |/ _ \/ __| '_ \ / _ \ \ /\ / /
 ___) | | | (_| |  __/\__ \ | | | (_) \ V  V /
|____/|_|_|\__,_|\___||___/_| |_|\___/ \_/\_/
"#;
    println!("{}", banner);
    println!("         Slideshow server started at: http://{}:{}\n", host, port);
}
