use crate::error::InputError;

/// Parses the two operand fields typed by a user.
///
/// Surrounding whitespace is ignored. Both fields must parse as finite `f64`;
/// `nan` and `inf` are refused like any other non-number.
pub fn parse_operands(numero1: &str, numero2: &str) -> Result<(f64, f64), InputError> {
    let parse = |text: &str| {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(InputError::InvalidNumbers)
    };
    Ok((parse(numero1)?, parse(numero2)?))
}
