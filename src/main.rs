use actix_cors::Cors;
use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use portfolio_chat::config::Config;
use portfolio_chat::web::routes;
use portfolio_chat::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting portfolio chat service");

    let config = Config::from_env();
    let bind_addr = (config.host.clone(), config.port);
    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if serve_static {
        info!("Serving static files from {}", static_dir.display());
    } else {
        warn!(
            "Static directory {} not found; only the API will be served",
            static_dir.display()
        );
    }

    let app_state = Data::new(AppState::new(config));

    // Start web server
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(routes::configure);
        if serve_static {
            app = app.service(fs::Files::new("/", &static_dir).index_file("index.html"));
        }
        app
    })
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}:{}", bind_addr.0, bind_addr.1))?;

    info!("Listening on http://{}:{}", bind_addr.0, bind_addr.1);
    server.run().await.context("web server error")
}
