//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::db::repos::Resource;

/// Integer record id from the `{id}` path segment.
///
/// A segment that is not an integer cannot name any record, so it is
/// rejected as 404 for `R` rather than as a bad request.
#[derive(Debug)]
pub struct RecordId<R> {
    id: i64,
    _resource: PhantomData<fn() -> R>,
}

impl<R> RecordId<R> {
    pub fn get(&self) -> i64 {
        self.id
    }
}

impl<S, R> FromRequestParts<S> for RecordId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::NotFound {
            resource: R::NAME,
            id: raw.clone(),
        })?;

        Ok(Self {
            id,
            _resource: PhantomData,
        })
    }
}

/// `Json<T>` whose rejections use the API's JSON error body.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
