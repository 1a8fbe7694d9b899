// File: services/showroom_backend/src/main.rs
use axum::{routing::get, Router};
use showroom_api::routes as api_routes;
use showroom_config::load_config;
use showroom_db::{
    DbClient, RepositoryFactory, ReservationRepository, ReservationRepositoryFactory,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    showroom_common::logging::init();

    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to connect to the reservation store");
    let repo = ReservationRepositoryFactory::new().create_repository(db_client);
    repo.init_schema()
        .await
        .expect("Failed to initialize the reservation schema");

    let booking_router =
        api_routes::routes(config.clone(), repo).expect("Failed to build the booking router");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Showroom booking API!" }))
        .merge(booking_router);

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use showroom_api::doc::ShowroomApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        let openapi_doc = ShowroomApiDoc::openapi();
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!(
        "Showroom booking service listening on http://{} ({} slots of {} minutes, {}:00 to {}:00 {})",
        addr,
        (config.scheduling.business_end_hour - config.scheduling.business_start_hour) * 60
            / config.scheduling.slot_minutes,
        config.scheduling.slot_minutes,
        config.scheduling.business_start_hour,
        config.scheduling.business_end_hour,
        config.scheduling.time_zone,
    );
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
