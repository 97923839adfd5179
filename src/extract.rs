use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request, rejection::FormRejection},
    http::{header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{ApiError, ApiResult};

/// Integer id taken from the single path segment of a route.
///
/// A numeric segment outside the `i32` key range is kept as `None`: it names a
/// record that cannot exist, not a malformed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub Option<i32>);

impl EntityId {
    /// The id, or `NotFound` for `entity` when it is out of key range.
    pub fn key(self, entity: &'static str) -> ApiResult<i32> {
        self.0.ok_or(ApiError::NotFound(entity))
    }
}

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        let digits = segment.strip_prefix('-').unwrap_or(&segment);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::Validation(format!(
                "Invalid id: `{segment}` is not an integer"
            )));
        }

        Ok(Self(segment.parse().ok()))
    }
}

/// Form body, URL-encoded or `multipart/form-data`.
///
/// A request without a form content type decodes as `T::default()`, an
/// undecodable body is a validation error. Of repeated multipart fields the
/// first one wins.
#[derive(Clone, Debug, Default)]
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
            return multipart_fields(multipart).await.map(Self);
        }

        match Form::<T>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self(fields)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn multipart_fields<T>(mut multipart: Multipart) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let mut fields = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Validation(err.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|err| ApiError::Validation(err.body_text()))?;
        fields.entry(name).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|err| ApiError::Validation(format!("Invalid form: {err}")))
}
