// Arithmetic layer: the four operations and the fixed table that pairs
// each of them with its menu key and display symbol. Nothing in here does
// I/O, so the whole module is plain functions over `f64`.

use crate::error::CalcError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`. A zero divisor (either sign) yields
/// `CalcError::DivisionByZero` instead of an infinity.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// One of the four menu operations. The enum is the operation table:
/// `key`, `symbol` and `apply` are the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Menu key that selects this operation.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Add => "1",
            Operation::Subtract => "2",
            Operation::Multiply => "3",
            Operation::Divide => "4",
        }
    }

    /// Look up an operation by its menu key.
    pub fn from_key(key: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }
}

/// Parse one operand as typed by the user. Surrounding whitespace is ignored.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(raw.trim().to_string()))
}

/// Render a number the way result lines show it: shortest round-trip
/// digits, integral values keep a trailing `.0` (`2` -> `2.0`), exponents
/// carry a sign and at least two digits (`1e+17`, `1e-05`), NaN is `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Build the `"{a} {symbol} {b} = {result}"` line for a finished operation.
pub fn result_line(op: Operation, a: f64, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_number(a),
        op.symbol(),
        format_number(b),
        format_number(result)
    )
}
