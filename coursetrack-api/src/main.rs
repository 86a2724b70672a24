use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

use coursetrack_api::config::ApiConfig;
use coursetrack_api::helpers::admin_gate::AdminGate;
use coursetrack_api::helpers::database::initialize_database;
use coursetrack_api::routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("coursetrack-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer must outlive the subscriber, which lives for the process
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let (config, config_path) = ApiConfig::load(args.config.as_deref())
        .map_err(|e| std::io::Error::other(format!("Failed to load config: {e}")))?;
    tracing::info!("Loaded config from {}", config_path.display());

    let (db, db_path) = initialize_database(config.database_path())
        .map_err(|e| std::io::Error::other(format!("Failed to initialize database: {e}")))?;
    tracing::info!("Database initialized at {}", db_path.display());

    let gate = AdminGate::new(config.admin_password());
    if gate.is_enabled() {
        tracing::info!("Delete endpoints require the admin password header");
    }

    let server_config = config.server();
    tracing::info!(
        "Server will listen on {}:{}",
        server_config.host,
        server_config.port
    );

    let server = HttpServer::new(move || {
        let cors_builder = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
        } else {
            Cors::default().allow_any_origin()
        };
        let cors = cors_builder
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["Accept", "Content-Type", "X-Admin-Password"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(gate.clone()))
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await
}
