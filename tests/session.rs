// End-to-end sessions: script stdin, run the menu loop, inspect stdout.

use menu_calc::console::LineConsole;
use menu_calc::menu::BANNER;
use menu_calc::ui::{
    self, SessionSummary, CHOICE_PROMPT, CONTINUE_PROMPT, FAREWELL, FIRST_OPERAND_PROMPT,
};
use std::io::Cursor;

const DIV_ZERO: &str = "Error: Division by zero is not allowed.";
const BAD_NUMBER: &str = "Invalid input. Please enter numeric values.";
const BAD_CHOICE: &str = "Invalid choice. Please select a valid option (1-5).";

fn session(input: &str) -> (SessionSummary, String) {
    let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());
    let summary = ui::run(&mut console).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    (summary, out)
}

/// Lines that look like `a op b = result`, with any prompts echoed on the
/// same line stripped off.
fn result_lines(out: &str) -> Vec<&str> {
    out.lines()
        .filter_map(|l| l.rsplit(": ").next())
        .filter(|l| l.contains(" = "))
        .collect()
}

#[test]
fn test_addition_prints_result_line() {
    let (summary, out) = session("1\n2\n3\nn\n");
    assert!(out.contains("2.0 + 3.0 = 5.0"));
    assert!(out.ends_with(&format!("{}\n", FAREWELL)));
    assert_eq!(summary, SessionSummary { computed: 1, failed: 0 });
}

#[test]
fn test_each_operation_uses_its_symbol() {
    let (summary, out) = session("1\n1.5\n2\ny\n2\n10\n4\ny\n3\n-3\n4\ny\n4\n9\n2\nn\n");
    assert_eq!(
        result_lines(&out),
        [
            "1.5 + 2.0 = 3.5",
            "10.0 - 4.0 = 6.0",
            "-3.0 * 4.0 = -12.0",
            "9.0 / 2.0 = 4.5",
        ]
    );
    assert_eq!(summary.computed, 4);
}

#[test]
fn test_large_and_tiny_results_use_signed_exponents() {
    let (_, out) = session("3\n1e16\n10\ny\n4\n1\n100000\nn\n");
    assert_eq!(
        result_lines(&out),
        ["1e+16 * 10.0 = 1e+17", "1.0 / 100000.0 = 1e-05"]
    );
}

#[test]
fn test_division_by_zero_reports_error_without_result() {
    let (summary, out) = session("4\n10\n0\nn\n");
    assert!(out.contains(DIV_ZERO));
    assert!(result_lines(&out).is_empty());
    // the loop still asks whether to continue
    assert!(out.contains(CONTINUE_PROMPT));
    assert_eq!(summary, SessionSummary { computed: 0, failed: 1 });
}

#[test]
fn test_exit_choice_never_asks_for_operands() {
    let (summary, out) = session("5\n");
    assert!(!out.contains(FIRST_OPERAND_PROMPT));
    assert!(out.contains(FAREWELL));
    assert_eq!(out.matches(BANNER).count(), 1);
    assert_eq!(summary, SessionSummary::default());
}

#[test]
fn test_invalid_choice_redisplays_menu() {
    let (_, out) = session("9\n5\n");
    assert!(out.contains(BAD_CHOICE));
    assert!(!out.contains(FIRST_OPERAND_PROMPT));
    assert_eq!(out.matches(BANNER).count(), 2);
    assert_eq!(out.matches(CHOICE_PROMPT).count(), 2);
}

#[test]
fn test_non_numeric_operand_restarts_entry() {
    let (summary, out) = session("3\nabc\n5\n5\nn\n");
    assert!(out.contains(BAD_NUMBER));
    assert_eq!(out.matches(FIRST_OPERAND_PROMPT).count(), 2);
    assert!(out.contains("5.0 * 5.0 = 25.0"));
    assert_eq!(summary.computed, 1);
}

#[test]
fn test_continue_answers_other_than_n_return_to_menu() {
    let (summary, out) = session("1\n1\n1\ny\n1\n2\n2\n\n1\n3\n3\nmaybe\n2\n1\n1\n N \n");
    assert_eq!(out.matches(BANNER).count(), 4);
    assert_eq!(summary.computed, 4);
    assert!(out.contains("1.0 - 1.0 = 0.0"));
    assert!(out.ends_with(&format!("{}\n", FAREWELL)));
}

#[test]
fn test_end_of_input_ends_session() {
    let (summary, out) = session("2\n8\n");
    assert!(out.contains(FAREWELL));
    assert!(result_lines(&out).is_empty());
    assert_eq!(summary, SessionSummary::default());

    let (_, out) = session("");
    assert_eq!(out.matches(BANNER).count(), 1);
    assert!(out.contains(FAREWELL));
}
