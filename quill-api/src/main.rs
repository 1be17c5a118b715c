use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use quill_api::cli::Cli;
use quill_api::config::ApiConfig;
use quill_api::helpers::llm::build_completion_service;
use quill_api::{handlers, logging, Database};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) = ApiConfig::load(cli.config.clone())?;
    cli.apply(&mut config);

    let _log_guard = logging::init_logging(config.logging.as_ref())?;
    info!(config = %config_path.display(), "Loaded configuration");

    let db = Database::open(&config.database.path)?;
    info!(path = %config.database.path.display(), "Opened database");
    let db = web::Data::new(db);

    let completions = web::Data::new(build_completion_service(&config.providers)?);

    let allowed_origins = config.allowed_origins();
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting quill-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .expose_headers([handlers::ai::PROVIDER_HEADER])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(db.clone())
            .app_data(completions.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
