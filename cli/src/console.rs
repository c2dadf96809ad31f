use anyhow::{Context, bail};
use hatfield_core::{GameError, GameSession, SessionState};
use std::io::{BufRead, Write};

pub const PROMPT: &str =
    "Where do you want to move? There are only 4 directions: up(u), down(d), left(l), right(r)";

/// Runs the prompt loop until the hat is found or the player falls into a hole.
pub fn play(
    session: &mut GameSession,
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<SessionState> {
    let mut line = String::new();

    while !session.is_terminal() {
        writeln!(output, "{}", session.field())?;
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Could not read move")? == 0 {
            bail!("Input closed before the game ended");
        }

        match session.apply_command(strip_line_ending(&line)) {
            Ok(outcome) => log::trace!("{outcome:?}"),
            Err(err @ (GameError::InvalidDirection | GameError::OutOfBounds)) => {
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let state = session.state();
    debug_assert!(state.is_finished());
    match state {
        SessionState::Won => writeln!(output, "YOU WIN")?,
        _ => writeln!(output, "YOU LOSE")?,
    }
    output.flush()?;
    Ok(state)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
