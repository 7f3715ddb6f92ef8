use std::sync::Arc;

use actix_web::middleware::{NormalizePath, from_fn};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;
use dotenvy::dotenv;

use employee_service::api::error::rate_limit_as_json;
use employee_service::config::Config;
use employee_service::db::init_db;
use employee_service::docs::ApiDoc;
use employee_service::routes;
use employee_service::storage::{PgStore, Storage};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Employee service is running"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "employee-service.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config).await?;

    let store = PgStore::new(pool, config.query_timeout);
    store
        .init()
        .await
        .context("Creation of employee table failed")?;
    let store: Data<dyn Storage> = Data::from(Arc::new(store) as Arc<dyn Storage>);

    let limiter = Arc::new(routes::build_limiter(config.rate_limit_per_min)?);
    let server_addr = config.server_addr.clone();

    info!(addr = %server_addr, "JSON API server listening");

    HttpServer::new(move || {
        // Last wrap runs first: Logger sees every response, including 429s.
        App::new()
            .wrap(limiter.clone())
            .wrap(from_fn(rate_limit_as_json))
            .wrap(NormalizePath::trim())
            .wrap(actix_web::middleware::Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .service(index)
            .configure(routes::configure)
    })
    .client_request_timeout(config.query_timeout)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
