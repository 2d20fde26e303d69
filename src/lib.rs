// Library root
// -----------
// This crate exposes the calculator as a small library. The binary
// (`main.rs`) picks a console and hands it to the menu loop.
//
// Module responsibilities:
// - `ops`: the four arithmetic operations, operand parsing and result
//   formatting.
// - `menu`: the menu text and choice parsing.
// - `console`: terminal abstraction, interactive or line based.
// - `ui`: operand entry, dispatch and the main loop.
// - `config` / `error`: environment settings and the user error taxonomy.
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod ops;
pub mod ui;

pub use error::CalcError;
pub use ops::Operation;
