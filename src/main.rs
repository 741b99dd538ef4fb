#[cfg(not(target_arch = "wasm32"))]
mod web;

#[cfg(not(target_arch = "wasm32"))]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};

    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let state = Data::new(web::AppState::from_env());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("member portal listening on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::routes::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(bind_addr)?
    .run()
    .await
}

// The frontend is mounted from lib.rs when compiled for the browser.
#[cfg(target_arch = "wasm32")]
fn main() {}
