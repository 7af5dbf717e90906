//! JSON body extractor with payload validation.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use casefile_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that has passed both deserialization and field validation.
///
/// Malformed JSON, missing required fields, and empty required strings all
/// reject with a 400 validation error before the handler body runs.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection_message(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(flatten_errors(&errors)))?;

        Ok(Self(value))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(e) => format!("Invalid request body: {e}"),
        JsonRejection::JsonSyntaxError(e) => format!("Malformed JSON: {e}"),
        JsonRejection::MissingJsonContentType(_) => {
            "Expected Content-Type: application/json".to_string()
        }
        other => format!("Invalid request body: {other}"),
    }
}

/// Render nested validation errors as one comma-separated message.
fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages.join(", ")
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for kind in errors.errors().values() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    match &err.message {
                        Some(msg) => out.push(msg.to_string()),
                        None => out.push(format!("invalid value ({})", err.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(map) => {
                for nested in map.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
