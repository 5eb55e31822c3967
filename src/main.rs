use std::sync::Arc;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::info;

mod credentials;
mod handlers;
mod models;
mod session;

use credentials::{CredentialStore, MemoryCredentials};

/// Shared application state, built once at startup and never mutated.
pub struct AppState {
    pub credentials: Arc<dyn CredentialStore>,
    pub session_secret: String,
}

#[get("/")]
async fn index() -> impl Responder {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Control Dashboard API</title>
        <style>
            body {
                background-color: #0d0d0d;
                color: #00ffcc;
                font-family: monospace;
                padding: 40px;
            }
            h1 {
                color: #ff00ff;
            }
            ul {
                list-style-type: square;
            }
            li {
                margin-bottom: 10px;
            }
            code {
                background: #1a1a1a;
                padding: 2px 6px;
                border-radius: 4px;
                color: #00ffcc;
            }
        </style>
    </head>
    <body>
        <h1>Control Dashboard</h1>
        <p>Welcome. Here are the available endpoints:</p>
        <ul>
            <li><code>GET /</code> – This help page</li>
            <li><code>GET /health</code> – Health check (returns OK)</li>
            <li><code>GET /login</code> – Login form</li>
            <li><code>POST /login</code> – Submit credentials</li>
            <li><code>GET /dashboard</code> – Control dashboard (login required)</li>
            <li><code>GET /logout</code> – Clear the session</li>
        </ul>
        <p style="margin-top: 40px; font-size: 12px;">dash_gate - powered by Rust + Actix Web</p>
    </body>
    </html>
    "#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Simple health check
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // the signing key only ever comes from the environment
    let session_secret = std::env::var("SESSION_SECRET")
        .map_err(|_| std::io::Error::other("SESSION_SECRET must be set"))?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Listening on: {}", addr);

    let state = web::Data::new(AppState {
        credentials: Arc::new(MemoryCredentials::seeded()),
        session_secret,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(health)
            .service(handlers::login_form)
            .service(handlers::login_submit)
            .service(handlers::dashboard)
            .service(handlers::logout)
    })
    .bind(addr)?
    .run()
    .await
}
