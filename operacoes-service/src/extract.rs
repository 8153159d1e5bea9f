use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use operacoes_core::{OperandsQuery, NON_FINITE_OPERAND_MESSAGE};

use crate::error::ApiError;

/// Query extractor for `numero1` / `numero2`.
///
/// Rejects missing, non-numeric and non-finite (`nan`, `inf`) operands with
/// [`ApiError::MalformedInput`] before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct Operands(pub OperandsQuery);

impl<S> FromRequestParts<S> for Operands
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<OperandsQuery>::from_request_parts(parts, state).await?;
        if !(query.numero1.is_finite() && query.numero2.is_finite()) {
            return Err(ApiError::MalformedInput(NON_FINITE_OPERAND_MESSAGE.to_string()));
        }
        Ok(Self(query))
    }
}
