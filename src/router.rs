use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tower_http::trace::TraceLayer;

use crate::config::{Config, SecurityConfig};
use crate::db::{Employee, Order, Person, Record, SqliteStorage};
use crate::handlers::{greeting, resources};
use crate::middleware::auth::require_basic_auth;
use crate::service::mapper::ResourceMapper;

/// Shared by every handler; cloned per request.
#[derive(Clone)]
pub struct PayrollState {
    pub storage: SqliteStorage,
    pub mapper: ResourceMapper,
    pub security: Arc<SecurityConfig>,
    pub greetings: Arc<AtomicU64>,
}

impl PayrollState {
    pub fn new(storage: SqliteStorage, cfg: &Config) -> Self {
        Self {
            storage,
            mapper: ResourceMapper::new(&cfg.basic.public_url),
            security: Arc::new(cfg.security.clone()),
            greetings: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Collection and item routes for one record kind.
pub fn resource_routes<R: Record>() -> Router<PayrollState> {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);
    Router::new()
        .route(
            &collection,
            get(resources::all::<R>).post(resources::create::<R>),
        )
        .route(
            &item,
            get(resources::one::<R>)
                .put(resources::replace::<R>)
                .delete(resources::remove::<R>),
        )
}

pub fn payroll_router(state: PayrollState) -> Router {
    Router::new()
        .merge(resource_routes::<Employee>())
        .merge(resource_routes::<Order>())
        .merge(resource_routes::<Person>())
        .route("/hello", get(greeting::hello))
        .route("/bye", get(greeting::bye))
        .route("/greeting", get(greeting::greeting))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
