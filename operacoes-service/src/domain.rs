//! Domain service for the arithmetic operations.
//!
//! Division by zero is rejected, and so is any result that does not fit in a
//! finite `f64`.

use operacoes_core::{Operator, OperationResult, DIVISION_BY_ZERO_MESSAGE, NON_FINITE_RESULT_MESSAGE};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by the domain service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The divisor was zero (either sign).
    #[error("{}", DIVISION_BY_ZERO_MESSAGE)]
    DivisionByZero,
    /// The result overflowed or is not a number.
    #[error("{}", NON_FINITE_RESULT_MESSAGE)]
    NonFiniteResult,
}

/// Stateless domain service performing the four operations.
///
/// Constructed once at startup and handed to the router as state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divides `a` by `b`, refusing a zero divisor.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, OperationError> {
        if b == 0.0 {
            warn!(a, "rejected division by zero");
            return Err(OperationError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Runs `operator` over the two operands and builds the result record.
    pub fn apply(&self, operator: Operator, a: f64, b: f64) -> Result<OperationResult, OperationError> {
        let resultado = match operator {
            Operator::Add => self.add(a, b),
            Operator::Subtract => self.subtract(a, b),
            Operator::Multiply => self.multiply(a, b),
            Operator::Divide => self.divide(a, b)?,
        };
        if !resultado.is_finite() {
            warn!(%operator, a, b, "result is not a finite number");
            return Err(OperationError::NonFiniteResult);
        }
        debug!(%operator, a, b, resultado, "operation performed");

        Ok(OperationResult {
            operacao: operator.label().to_string(),
            numero1: a,
            numero2: b,
            resultado,
        })
    }
}
