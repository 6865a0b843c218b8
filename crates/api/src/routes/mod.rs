pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{clients, emails, knowledge, statistics, users, vehicles, waitlist};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /emails                      list (filter: status, priority, needsHuman), create
/// /emails/{id}                 get, update, delete
///
/// /vehicles                    list (filter: status), create
/// /vehicles/{id}               get, update, delete
///
/// /waitlist                    list (filter: status), create
/// /waitlist/{id}               get, update, delete
///
/// /knowledge                   list (filter: category), create
/// /knowledge/{id}              get, update, delete
///
/// /clients                     list, create
/// /clients/{id}                get, update (no delete)
///
/// /users                       list, create (credential-redacted)
/// /users/{id}                  get, update, delete
///
/// /statistics                  raw daily snapshots (read-only)
/// /statistics/summary          static aggregate view
/// ```
pub fn api_routes() -> Router<AppState> {
    let email_routes = Router::new()
        .route("/", get(emails::list).post(emails::create))
        .route(
            "/{id}",
            get(emails::get_by_id)
                .patch(emails::update)
                .delete(emails::delete),
        );

    let vehicle_routes = Router::new()
        .route("/", get(vehicles::list).post(vehicles::create))
        .route(
            "/{id}",
            get(vehicles::get_by_id)
                .patch(vehicles::update)
                .delete(vehicles::delete),
        );

    let waitlist_routes = Router::new()
        .route("/", get(waitlist::list).post(waitlist::create))
        .route(
            "/{id}",
            get(waitlist::get_by_id)
                .patch(waitlist::update)
                .delete(waitlist::delete),
        );

    let knowledge_routes = Router::new()
        .route("/", get(knowledge::list).post(knowledge::create))
        .route(
            "/{id}",
            get(knowledge::get_by_id)
                .patch(knowledge::update)
                .delete(knowledge::delete),
        );

    let client_routes = Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route("/{id}", get(clients::get_by_id).patch(clients::update));

    let user_routes = Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get_by_id)
                .patch(users::update)
                .delete(users::delete),
        );

    let statistics_routes = Router::new()
        .route("/", get(statistics::list))
        .route("/summary", get(statistics::summary));

    Router::new()
        .nest("/emails", email_routes)
        .nest("/vehicles", vehicle_routes)
        .nest("/waitlist", waitlist_routes)
        .nest("/knowledge", knowledge_routes)
        .nest("/clients", client_routes)
        .nest("/users", user_routes)
        .nest("/statistics", statistics_routes)
}
