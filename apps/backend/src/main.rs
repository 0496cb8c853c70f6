use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::http::entry::entry;
use backend::infra::state::build_state;
use backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let secret = match std::env::var("BACKEND_TOKEN_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            eprintln!("❌ BACKEND_TOKEN_SECRET must be set");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_security(SecurityConfig::new(secret.as_bytes()))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 dungeonsave backend listening on http://{host}:{port}");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            // All routing happens in the crate's own dispatcher
            .default_service(web::route().to(entry))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
