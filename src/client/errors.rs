//! Client errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::cart::{
    errors::FormatError,
    wire::{GraphQlError, UserError},
};

/// Errors that can occur when talking to the commerce backend.
///
/// There is no retry or backoff here; every failure propagates to the
/// caller, which owns the recovery policy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport or serialization failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,

        /// Response body, best effort.
        body: String,
    },

    /// The backend reported top-level GraphQL errors.
    #[error("graphql errors: {}", join_graphql(.0))]
    GraphQl(Vec<GraphQlError>),

    /// The mutation was rejected with validation errors inside a 200
    /// response. The cart is unchanged on the backend.
    #[error("backend rejected the request: {}", join_user(.0))]
    UserErrors(Vec<UserError>),

    /// The response body did not deserialize into the expected shape.
    #[error("malformed response body")]
    Malformed(#[source] serde_json::Error),

    /// The response parsed but carried neither data nor errors.
    #[error("response missing expected cart data")]
    MissingData,

    /// The cart payload parsed but could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn join_graphql(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_user(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_display_joins_messages() {
        let error = ClientError::UserErrors(vec![
            UserError {
                field: None,
                message: "quantity must be positive".into(),
            },
            UserError {
                field: Some(vec!["lines".into()]),
                message: "line not found".into(),
            },
        ]);

        assert_eq!(
            error.to_string(),
            "backend rejected the request: quantity must be positive; line not found"
        );
    }
}
