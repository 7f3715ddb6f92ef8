use crate::api::{employee, error};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

/// Per-IP limiter allowing `requests_per_min` requests with an equal burst.
pub fn build_limiter(
    requests_per_min: u32,
) -> anyhow::Result<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit: {requests_per_min} per minute"))?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .app_data(error::query_config())
        // /employee
        .service(
            web::resource("/employee")
                .route(web::post().to(employee::create_employee))
                .default_service(web::to(employee::method_not_allowed)),
        )
        // /employee/{id}
        .service(
            web::resource("/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee))
                .default_service(web::to(employee::method_not_allowed)),
        )
        // /employees?limit=&offset=
        .service(
            web::resource("/employees")
                .route(web::get().to(employee::list_employees))
                .default_service(web::to(employee::method_not_allowed)),
        );
}
