use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::atomic::Ordering;

use crate::router::PayrollState;
use crate::types::greeting::{Greeting, NameQuery};

/// GET /hello?name=
pub async fn hello(Query(query): Query<NameQuery>) -> String {
    format!("Hello {}!", query.name)
}

/// GET /bye?name=
pub async fn bye(Query(query): Query<NameQuery>) -> String {
    format!("Goodbye {}!", query.name)
}

/// GET /greeting?name= -> JSON greeting carrying a per-process sequence number.
pub async fn greeting(
    State(state): State<PayrollState>,
    Query(query): Query<NameQuery>,
) -> Json<Greeting> {
    let id = state.greetings.fetch_add(1, Ordering::Relaxed) + 1;
    Json(Greeting {
        id,
        content: format!("Hello, {}!", query.name),
    })
}
