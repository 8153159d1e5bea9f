use std::io::{self, Write};

use operacoes_core::Operator;

use crate::client::OperationClient;

/// The calls made by the scripted demonstration, with their captions.
pub const DEMO_STEPS: [(&str, Operator, f64, f64); 5] = [
    ("Soma", Operator::Add, 10.0, 5.0),
    ("Subtração", Operator::Subtract, 10.0, 5.0),
    ("Multiplicação", Operator::Multiply, 15.0, 5.0),
    ("Divisão", Operator::Divide, 10.0, 5.0),
    ("Divisão por zero", Operator::Divide, 10.0, 0.0),
];

/// Calls every demo step in order and prints one line per call.
///
/// A failed call prints its error and the script moves on to the next step.
pub async fn run_demo<W: Write>(client: &OperationClient, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Consumindo a API de Operações Matemáticas ===")?;

    match client.welcome().await {
        Ok(welcome) => writeln!(out, "{}", welcome.mensagem)?,
        Err(e) => writeln!(out, "Erro: {e}")?,
    }

    for (caption, operator, a, b) in DEMO_STEPS {
        match client.call(operator, a, b).await {
            Ok(result) => {
                let record = serde_json::to_string(&result).map_err(io::Error::other)?;
                writeln!(out, "{caption}: {record}")?;
            }
            Err(e) => writeln!(out, "{caption}: Erro: {e}")?,
        }
    }
    Ok(())
}
