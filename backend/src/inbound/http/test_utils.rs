//! Test helpers for the HTTP adapter.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::UserRepository;
use crate::inbound::http::error::{json_error_handler, route_not_found};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};

/// App wired the way the server wires it, minus health and docs.
pub fn users_app(
    repository: Arc<dyn UserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_repository(repository)))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(list_users)
        .service(create_user)
        .default_service(web::to(route_not_found))
}
