// Console layer: everything the calculator says or asks goes through the
// `Console` trait. `TermConsole` is used for a real terminal (dialoguer
// prompts, colored errors); `LineConsole` speaks plain lines over any
// reader/writer pair, which covers piped input and the tests.

use anyhow::{Context, Result};
use crossterm::style::{style, Stylize};
use dialoguer::Input;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Print one line of normal output.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print one line reporting a user error.
    fn warn(&mut self, line: &str) -> Result<()>;

    /// Prompt and read one answer. `None` means input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line-oriented console over arbitrary streams.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    /// Give back the output stream, e.g. to inspect a test transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to output")
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        self.say(line)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            // keep the transcript tidy when input ends mid-prompt
            writeln!(self.output).context("Failed to write to output")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Interactive console for a real terminal.
#[derive(Default)]
pub struct TermConsole;

impl Console for TermConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        println!("{}", style(line).red());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        // empty answers are meaningful at the continue prompt
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read from terminal"),
        }
    }
}
