// UI layer: the menu loop. Shows the menu, asks for a choice, collects
// the operands, dispatches and then asks whether to go again. All I/O goes
// through a `Console` so the same loop runs on a terminal or on buffers.

use crate::console::Console;
use crate::menu::{menu_lines, Choice};
use crate::ops::{parse_operand, result_line, Operation};
use anyhow::Result;
use log::{debug, info};

pub const CHOICE_PROMPT: &str = "Enter choice (1-5)";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number";
pub const CONTINUE_PROMPT: &str = "Do you want to perform another calculation? (y/n)";
pub const FAREWELL: &str = "Thank you for using the calculator. Goodbye!";

/// Counts of what happened during one session. Logged on exit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub computed: usize,
    pub failed: usize,
}

/// Print the banner and the five numbered options.
pub fn render_menu(console: &mut impl Console) -> Result<()> {
    for line in menu_lines() {
        console.say(&line)?;
    }
    Ok(())
}

/// Ask for both operands until both parse. A bad value on either prompt
/// is reported at once and entry restarts from the first operand.
/// Returns `None` if input runs out.
pub fn read_operands(console: &mut impl Console) -> Result<Option<(f64, f64)>> {
    loop {
        let Some(first) = console.ask(FIRST_OPERAND_PROMPT)? else {
            return Ok(None);
        };
        let a = match parse_operand(&first) {
            Ok(a) => a,
            Err(e) => {
                debug!("rejected first operand: {:?}", e);
                console.warn(&e.to_string())?;
                continue;
            }
        };

        let Some(second) = console.ask(SECOND_OPERAND_PROMPT)? else {
            return Ok(None);
        };
        match parse_operand(&second) {
            Ok(b) => return Ok(Some((a, b))),
            Err(e) => {
                debug!("rejected second operand: {:?}", e);
                console.warn(&e.to_string())?;
            }
        }
    }
}

/// Run `op` on the operands and print the result line. Returns `false`
/// when the operation produced no result (division by zero).
pub fn dispatch(console: &mut impl Console, op: Operation, a: f64, b: f64) -> Result<bool> {
    debug!("dispatching {:?} with a={} b={}", op, a, b);
    match op.apply(a, b) {
        Ok(value) => {
            console.say(&result_line(op, a, b, value))?;
            Ok(true)
        }
        Err(e) => {
            info!("{:?} produced no result: {}", op, e);
            console.warn(&e.to_string())?;
            Ok(false)
        }
    }
}

/// Only an explicit "n" leaves; every other answer means another round.
pub fn wants_exit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}

/// Main loop. Runs until the user picks exit, answers "n" at the continue
/// prompt, or input is exhausted; prints the farewell in every case.
pub fn run(console: &mut impl Console) -> Result<SessionSummary> {
    info!("calculator session started");
    let mut summary = SessionSummary::default();

    loop {
        render_menu(console)?;

        let Some(answer) = console.ask(CHOICE_PROMPT)? else {
            break;
        };
        let op = match Choice::parse(&answer) {
            Ok(Choice::Exit) => break,
            Ok(Choice::Compute(op)) => op,
            Err(e) => {
                debug!("rejected menu choice: {:?}", e);
                console.warn(&e.to_string())?;
                continue;
            }
        };

        let Some((a, b)) = read_operands(console)? else {
            break;
        };
        if dispatch(console, op, a, b)? {
            summary.computed += 1;
        } else {
            summary.failed += 1;
        }

        match console.ask(CONTINUE_PROMPT)? {
            Some(answer) if !wants_exit(&answer) => continue,
            _ => break,
        }
    }

    console.say(FAREWELL)?;
    info!(
        "calculator session ended: {} computed, {} failed",
        summary.computed, summary.failed
    );
    Ok(summary)
}
