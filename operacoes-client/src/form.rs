//! State and behaviour of the calculator form, independent of any toolkit.
//!
//! The graphical client renders a [`CalculatorForm`] and calls
//! [`CalculatorForm::calculate`] when the user presses "Calcular".

use operacoes_core::Operator;
use tracing::warn;

use crate::client::OperationClient;
use crate::input::parse_operands;

pub const RESULT_PREFIX: &str = "Resultado: ";

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub numero1: String,
    pub numero2: String,
    pub operator: Operator,
    /// Text of the result label.
    pub result_label: String,
    /// Message for the blocking "Erro" dialog, when one is open.
    pub alert: Option<String>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            numero1: String::new(),
            numero2: String::new(),
            operator: Operator::Add,
            result_label: RESULT_PREFIX.to_string(),
            alert: None,
        }
    }
}

impl CalculatorForm {
    /// Validates the fields and, if they hold numbers, performs one round trip.
    ///
    /// Invalid input opens the alert and leaves the result label untouched.
    /// Service and transport failures are written into the result label.
    pub async fn calculate(&mut self, client: &OperationClient) {
        let (a, b) = match parse_operands(&self.numero1, &self.numero2) {
            Ok(operands) => operands,
            Err(e) => {
                self.alert = Some(e.to_string());
                return;
            }
        };

        let outcome = match client.invoke(self.operator, a, b).await {
            Ok(value) => format!("{value:?}"),
            Err(e) => {
                warn!(operator = %self.operator, "operation failed: {}", e);
                format!("Erro: {e}")
            }
        };
        self.result_label = format!("{RESULT_PREFIX}{outcome}");
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
