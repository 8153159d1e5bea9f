//! # operacoes-core
//!
//! Types shared across the service boundary of the arithmetic operations API.
//!
//! The service serializes these structs and the clients deserialize them, so
//! the field names here *are* the wire contract:
//!
//! - [`Operator`]: the closed set of four operations and their URL segments.
//! - [`OperandsQuery`]: the `numero1` / `numero2` query string.
//! - [`OperationResult`]: the success body of every operation endpoint.
//! - [`Welcome`]: the body of `GET /`.
//! - [`ErrorDetail`]: the body of every error response.

pub mod dtos;
pub mod operator;

pub use dtos::{ErrorDetail, OperandsQuery, OperationResult, Welcome};
pub use operator::{Operator, UnknownOperator};

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Bem-vindo(a) à API de Operações Matemáticas!";

/// Message carried by the 400 response of `/divisao` when `numero2` is zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Divisão por zero não é permitida";

/// Message carried by the 422 response when the result overflows `f64`.
pub const NON_FINITE_RESULT_MESSAGE: &str = "O resultado não é um número finito";

/// Message carried by the 422 response when an operand is `nan` or infinite.
pub const NON_FINITE_OPERAND_MESSAGE: &str = "Os números devem ser finitos";
