mod config;
mod errors;
mod handlers;
mod models;
mod services;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::{config::Config, services::DatabaseService};

fn app(database: DatabaseService, config: Config) -> Router {
    Router::new()
        // Page routes
        .route("/", get(handlers::serve_home))
        .route(
            "/login",
            get(handlers::serve_login_page).post(handlers::handle_login),
        )
        .route(
            "/register",
            get(handlers::serve_register_page).post(handlers::handle_register),
        )
        // Task API; anything but GET/POST/DELETE answers 405
        .route(
            "/tasks",
            get(handlers::list_tasks)
                .post(handlers::create_task)
                .delete(handlers::delete_all_tasks),
        )
        .route("/tasks/:id", delete(handlers::delete_task))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // JSON bodies only; nothing here uploads files
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        // Add state
        .with_state((database, config))
}

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Legacy deployments keep their settings in a .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Connect to the database and verify the connection
    sqlx::any::install_default_drivers();
    let url = config
        .database
        .connection_url()
        .expect("Incomplete database configuration");
    let database = DatabaseService::connect(&url)
        .await
        .expect("Failed to connect to database");
    database.ping().await.expect("Failed to ping database");
    println!("Database connected successfully!");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server");

    println!("Server running on http://{}", addr);
    axum::serve(listener, app(database, config).into_make_service())
        .await
        .expect("Failed to start server");
}
