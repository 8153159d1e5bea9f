use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the four arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown operator '{0}', expected one of: soma, subtracao, multiplicacao, divisao \
     (or add, subtract, multiply, divide)"
)]
pub struct UnknownOperator(pub String);

impl Operator {
    /// All operators, in the order they are offered to users.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The URL path segment that addresses this operation, e.g. `/soma`.
    pub fn route(self) -> &'static str {
        match self {
            Operator::Add => "soma",
            Operator::Subtract => "subtracao",
            Operator::Multiply => "multiplicacao",
            Operator::Divide => "divisao",
        }
    }

    /// The label written into the `operacao` field of a result.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "soma",
            Operator::Subtract => "subtração",
            Operator::Multiply => "multiplicação",
            Operator::Divide => "divisão",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Accepts either the English name (`add`) or the route segment (`soma`),
/// ignoring ASCII case and surrounding whitespace.
impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| {
                name.eq_ignore_ascii_case(op.route()) || name.eq_ignore_ascii_case(op.english_name())
            })
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
