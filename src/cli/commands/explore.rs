//! Interactive exploration loop

use super::shared::run_session;
use crate::cli::args::CommonArgs;
use crate::cli::input::Prompter;
use crate::cli::render::render_report;
use crate::config::BikeshareConfig;
use std::io::{BufRead, Write};
use tracing::info;

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Prompt for selections on the terminal until the user declines a restart
pub fn run_explore(common: &CommonArgs, config: &BikeshareConfig) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    let sessions = explore(common, config, &mut prompter)?;
    info!("Exploration finished after {} sessions", sessions);
    Ok(())
}

/// Run sessions over any prompter, returning how many completed
///
/// Each restart reloads the city file.
pub fn explore<R: BufRead, W: Write>(
    common: &CommonArgs,
    config: &BikeshareConfig,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<usize> {
    let mut sessions = 0;
    loop {
        let selection = prompter.prompt_selection()?;
        let outcome = run_session(common, config, selection)?;
        render_report(prompter.writer(), &outcome)?;
        sessions += 1;

        if !prompter.confirm(RESTART_PROMPT)? {
            return Ok(sessions);
        }
    }
}
