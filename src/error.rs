// Error taxonomy for the calculator. Every variant is a user mistake the
// loop recovers from; the `Display` text is exactly what the user sees.
// Terminal failures are not modelled here, they travel as `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input. Please enter numeric values.")]
    InvalidNumber(String),
    #[error("Invalid choice. Please select a valid option (1-5).")]
    InvalidChoice(String),
    #[error("Error: Division by zero is not allowed.")]
    DivisionByZero,
}
