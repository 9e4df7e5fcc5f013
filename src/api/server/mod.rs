mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, patch, post, put},
    Router,
};

use crate::api::{interface::DynAPI, API};
use crate::auth;
use crate::notifications::Notifier;

use crate::api::server::handlers::{
    clients, drivers, notifications, routing, transports, users, vehicles,
};

pub async fn serve<T: API + Sync + Send + 'static>(api: T, notifier: Notifier) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/clients", post(clients::create).get(clients::list))
        .route(
            "/clients/:id",
            get(clients::find)
                .patch(clients::update)
                .delete(clients::remove),
        )
        .route("/drivers", post(drivers::create).get(drivers::list))
        .route(
            "/drivers/:id",
            get(drivers::find)
                .patch(drivers::update)
                .delete(drivers::remove),
        )
        .route("/drivers/:id/vehicle", put(drivers::assign_vehicle))
        .route("/drivers/:id/documents", patch(drivers::update_documents))
        .route("/vehicles", post(vehicles::create).get(vehicles::list))
        .route(
            "/vehicles/:id",
            get(vehicles::find)
                .patch(vehicles::update)
                .delete(vehicles::remove),
        )
        .route("/transports", post(transports::create).get(transports::list))
        .route(
            "/transports/:id",
            get(transports::find)
                .patch(transports::update)
                .delete(transports::remove),
        )
        .route("/users", post(users::create).get(users::list))
        .route(
            "/users/:id",
            get(users::find).patch(users::update).delete(users::remove),
        )
        .route("/users/:id/block", patch(users::block))
        .route("/users/:id/unblock", patch(users::unblock))
        .route("/users/:id/ban", patch(users::ban))
        .route("/users/:id/unban", patch(users::unban))
        .route("/routing/calculate", post(routing::calculate))
        .route_layer(middleware::from_fn(auth::require_bearer))
        // the socket checks its own token, so it sits outside the bearer layer
        .route("/notifications", get(notifications::subscribe))
        .layer(Extension(api))
        .layer(Extension(notifier));

    let addr = SocketAddr::from(([127, 0, 0, 1], 6006));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
