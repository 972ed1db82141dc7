use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use science_report::application::configure;
use science_report::config::ServerConfig;
use science_report::science::ScienceSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,actix_web=warn,actix_server=warn"),
    )
    .init();

    let server_config = ServerConfig::from_env();

    // Force the first load so a bad deployment shows up in the startup log.
    // A failure stays cached and every request answers with it.
    let settings = web::Data::new(ScienceSettings::from_env());
    match settings.science_yield() {
        Ok(science_yield) => info!("Loaded science yield {science_yield}"),
        Err(e) => error!("{e}; all report requests will fail until the service is reconfigured and restarted"),
    }

    info!(
        "Starting science report HTTP service on {}",
        server_config.server_listen_address
    );
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(settings.clone())
            .configure(configure)
    });
    if let Some(workers) = server_config.workers {
        server = server.workers(workers);
    }

    server
        .bind(server_config.server_listen_address.as_str())?
        .run()
        .await
}
