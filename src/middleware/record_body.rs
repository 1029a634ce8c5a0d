use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::PayrollError;

/// JSON request body for a record. Every rejection (missing content type,
/// bad syntax, wrong shape) becomes a 400.
pub struct RecordBody<R>(pub R);

impl<S, R> FromRequest<S> for RecordBody<R>
where
    S: Send + Sync,
    R: DeserializeOwned + Send,
{
    type Rejection = PayrollError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<R>::from_request(req, state).await {
            Ok(Json(record)) => Ok(RecordBody(record)),
            Err(rejection) => Err(PayrollError::MalformedBody(rejection.body_text())),
        }
    }
}
