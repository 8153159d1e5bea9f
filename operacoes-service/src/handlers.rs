use axum::extract::State;
use axum::Json;
use operacoes_core::{ErrorDetail, OperandsQuery, Operator, OperationResult, Welcome, WELCOME_MESSAGE};

use crate::domain::Calculator;
use crate::error::Result;
use crate::extract::Operands;

fn calculate(calculator: &Calculator, operator: Operator, operands: OperandsQuery) -> Result<Json<OperationResult>> {
    let result = calculator.apply(operator, operands.numero1, operands.numero2)?;
    Ok(Json(result))
}

/// Returns the welcome greeting.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "welcome",
    responses(
        (status = 200, description = "Successful greeting", body = Welcome)
    )
)]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        mensagem: WELCOME_MESSAGE.to_string(),
    })
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/soma",
    operation_id = "soma",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Sum of numero1 and numero2", body = OperationResult),
        (status = 422, description = "Missing or non-finite operand, or a result that is not finite", body = ErrorDetail)
    )
)]
pub async fn add(State(calculator): State<Calculator>, Operands(operands): Operands) -> Result<Json<OperationResult>> {
    calculate(&calculator, Operator::Add, operands)
}

/// Subtract numero2 from numero1
#[utoipa::path(
    get,
    path = "/subtracao",
    operation_id = "subtracao",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Difference of numero1 and numero2", body = OperationResult),
        (status = 422, description = "Missing or non-finite operand, or a result that is not finite", body = ErrorDetail)
    )
)]
pub async fn subtract(State(calculator): State<Calculator>, Operands(operands): Operands) -> Result<Json<OperationResult>> {
    calculate(&calculator, Operator::Subtract, operands)
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/multiplicacao",
    operation_id = "multiplicacao",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Product of numero1 and numero2", body = OperationResult),
        (status = 422, description = "Missing or non-finite operand, or a result that is not finite", body = ErrorDetail)
    )
)]
pub async fn multiply(State(calculator): State<Calculator>, Operands(operands): Operands) -> Result<Json<OperationResult>> {
    calculate(&calculator, Operator::Multiply, operands)
}

/// Divide numero1 by numero2
///
/// A zero divisor is rejected with 400.
#[utoipa::path(
    get,
    path = "/divisao",
    operation_id = "divisao",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Quotient of numero1 and numero2", body = OperationResult),
        (status = 400, description = "Division by zero", body = ErrorDetail),
        (status = 422, description = "Missing or non-finite operand, or a result that is not finite", body = ErrorDetail)
    )
)]
pub async fn divide(State(calculator): State<Calculator>, Operands(operands): Operands) -> Result<Json<OperationResult>> {
    calculate(&calculator, Operator::Divide, operands)
}
