// Menu layer: the fixed banner shown at the top of every iteration and the
// mapping from a typed key to what the user asked for.

use crate::error::CalcError;
use crate::ops::Operation;

pub const BANNER: &str = "===== Simple Calculator =====";

/// Key that leaves the calculator from the main menu.
pub const EXIT_KEY: &str = "5";

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Compute(Operation),
    Exit,
}

impl Choice {
    /// Parse a menu answer. Surrounding whitespace is ignored; anything
    /// outside 1-5 is rejected.
    pub fn parse(raw: &str) -> Result<Choice, CalcError> {
        let key = raw.trim();
        if key == EXIT_KEY {
            return Ok(Choice::Exit);
        }
        Operation::from_key(key)
            .map(Choice::Compute)
            .ok_or_else(|| CalcError::InvalidChoice(key.to_string()))
    }
}

/// Lines of the menu, banner first, in display order.
pub fn menu_lines() -> Vec<String> {
    let mut lines = vec![BANNER.to_string()];
    lines.extend(
        Operation::ALL
            .iter()
            .map(|op| format!("{}. {}", op.key(), op.label())),
    );
    lines.push(format!("{}. Exit", EXIT_KEY));
    lines
}
