use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by every operation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperandsQuery {
    /// First operand.
    pub numero1: f64,
    /// Second operand.
    pub numero2: f64,
}

/// The outcome of one arithmetic operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationResult {
    /// Localized operation label, e.g. `"divisão"`.
    pub operacao: String,
    pub numero1: f64,
    pub numero2: f64,
    pub resultado: f64,
}

/// A simple greeting response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Welcome {
    pub mensagem: String,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_result_uses_portuguese_field_names() {
        let result = OperationResult {
            operacao: "divisão".to_string(),
            numero1: 10.0,
            numero2: 4.0,
            resultado: 2.5,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({ "operacao": "divisão", "numero1": 10.0, "numero2": 4.0, "resultado": 2.5 })
        );
    }

    #[test]
    fn error_detail_requires_the_detail_field() {
        let parsed: ErrorDetail = serde_json::from_str(r#"{"detail":"boom"}"#).unwrap();
        assert_eq!(parsed, ErrorDetail::new("boom"));
        assert!(serde_json::from_str::<ErrorDetail>(r#"{"message":"boom"}"#).is_err());
    }

    #[test]
    fn operands_query_accepts_integer_literals() {
        let query: OperandsQuery = serde_json::from_value(json!({ "numero1": 10, "numero2": 5 })).unwrap();
        assert_eq!(query, OperandsQuery { numero1: 10.0, numero2: 5.0 });
    }
}
