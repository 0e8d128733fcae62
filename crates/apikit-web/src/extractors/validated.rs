//! `ValidatedJson` extractor — deserializes a JSON body and runs its
//! `validator` rules before the handler sees it.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use apikit_core::error::AppError;

/// JSON body that passed validation.
///
/// Malformed JSON is rejected as an illegal argument (HTTP 400, code 2800);
/// rule violations become a validation error (HTTP 400, code 1200) whose
/// envelope message is the field-name to message map.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| AppError::illegal_argument(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}
