//! Request extractors that reject with [`AppError`]
//!
//! axum's own `Json` rejection answers 415/422 with a plain-text body.
//! Every malformed body here is a 400 `{"error":"Invalid input"}` instead.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor mapping any rejection to `Invalid input`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request("Invalid input").with_source(rejection)),
        }
    }
}
