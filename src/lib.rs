pub mod application {
    pub mod report;
    pub mod status;

    use crate::paths;
    use actix_web::web;

    /// Registers the service routes. Expects `Data<ScienceSettings>` as app data.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope(paths::API_BASE)
                .route(paths::SAMPLE, web::get().to(report::sample))
                .route(paths::HEALTH, web::get().to(status::health)),
        );
    }
}
pub mod config;
pub mod errors;
pub mod paths;
pub mod science;
