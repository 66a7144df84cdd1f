mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let state = state::AppState::new(&config);

    let app = routes::leptos_app(state, &config).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, node_budget = config.node_budget, "weekplan listening");
    axum::serve(listener, app).await.expect("server failed");
}
