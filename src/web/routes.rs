use actix_web::web;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::pages::configure(cfg);
    handlers::auth::configure(cfg);
}
