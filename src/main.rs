// Entrypoint for the calculator.
// - Keeps `main` small: set up logging, pick a console, run the menu loop.
// - Returns `anyhow::Result` so terminal failures end with a message.

use crossterm::tty::IsTty;
use menu_calc::{
    config::Config,
    console::{LineConsole, TermConsole},
    ui,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Logs go to stderr; RUST_LOG wins over CALC_LOG.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    if !config.plain && std::io::stdin().is_tty() {
        ui::run(&mut TermConsole)?;
    } else {
        ui::run(&mut LineConsole::stdio())?;
    }
    Ok(())
}
