//! Backend entry-point: wires the admin REST endpoints and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

use backend::domain::admin::AdminUserService;
use backend::domain::dispatch::Dispatcher;
use backend::domain::ports::{FixtureNotificationGateway, FixtureUserRepository, FixtureVehicleRepository};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::{admin_users, HttpState};
#[cfg(debug_assertions)]
use backend::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let http_state = make_state();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr.as_str())?;

    health_state.mark_ready();
    server.run().await
}

/// Assemble the service graph over the in-memory fixture adapters.
///
/// Persistence and notification transports are injected here once their
/// outbound adapters land; the handlers only see the driving ports.
fn make_state() -> HttpState {
    let gateway = Arc::new(FixtureNotificationGateway);
    let dispatch = Arc::new(Dispatcher::new(gateway));
    let service = Arc::new(AdminUserService::new(
        Arc::new(FixtureUserRepository),
        Arc::new(FixtureVehicleRepository),
        dispatch,
    ));
    HttpState::new(service.clone(), service)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .app_data(web::Data::new(http_state))
        .service(admin_users::get_user)
        .service(admin_users::list_users)
        .service(admin_users::approve_vehicle)
        .service(admin_users::set_user_active);

    let app = App::new()
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
    );

    app
}
