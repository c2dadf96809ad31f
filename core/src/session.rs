use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game: the field being walked and where the player stands on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    field: Field,
    position: Coord2,
    reached_hat: bool,
    fell_in_hole: bool,
    move_count: u32,
}

impl GameSession {
    pub fn new(mut field: Field) -> Self {
        if field[START] != Cell::Path {
            log::warn!("Start cell was {:?}, marking it as path", field[START]);
            field[START] = Cell::Path;
        }
        Self {
            field,
            position: START,
            reached_hat: false,
            fell_in_hole: false,
            move_count: 0,
        }
    }

    pub fn generate(generator: &mut impl FieldGenerator, size: Coord) -> Result<Self> {
        generator.generate(size).map(Self::new)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn reached_hat(&self) -> bool {
        self.reached_hat
    }

    pub fn fell_in_hole(&self) -> bool {
        self.fell_in_hole
    }

    /// Number of steps that landed on a free cell.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_terminal(&self) -> bool {
        self.reached_hat || self.fell_in_hole
    }

    pub fn state(&self) -> SessionState {
        if self.reached_hat {
            SessionState::Won
        } else if self.fell_in_hole {
            SessionState::Lost
        } else {
            SessionState::InProgress
        }
    }

    /// Parses a `u`, `d`, `l` or `r` command and applies it.
    pub fn apply_command(&mut self, command: &str) -> Result<MoveOutcome> {
        let direction = command.parse()?;
        self.apply_move(direction)
    }

    /// Steps once in `direction`.
    ///
    /// Stepping onto the hat or a hole ends the session and leaves the position where it was. Errors leave the
    /// session untouched.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        self.check_not_finished()?;
        let next = direction
            .step(self.position, self.field.size())
            .ok_or(GameError::OutOfBounds)?;

        Ok(match self.field[next] {
            Cell::Hat => {
                self.reached_hat = true;
                log::debug!("Found the hat at {next:?}");
                FoundHat
            }
            Cell::Hole => {
                self.fell_in_hole = true;
                log::debug!("Fell into a hole at {next:?}");
                FellInHole
            }
            Cell::Empty | Cell::Path => {
                self.field[next] = Cell::Path;
                self.position = next;
                self.move_count = self.move_count.saturating_add(1);
                Moved(next)
            }
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_terminal() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn session(text: &str) -> GameSession {
        GameSession::new(text.parse().unwrap())
    }

    fn assert_unchanged(session: &GameSession, position: Coord2) {
        assert_eq!(session.position(), position);
        assert!(!session.reached_hat());
        assert!(!session.fell_in_hole());
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn new_session_starts_in_corner() {
        let session = session("*░\n░^");
        assert_unchanged(&session, START);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn start_cell_is_marked_as_path() {
        let session = session("░░\n░^");
        assert_eq!(session.field()[START], Cell::Path);
    }

    #[test]
    fn invalid_command_changes_nothing() {
        let mut session = session("*░\n░^");
        let before = session.clone();

        for command in ["", "x", "U", "up", " r", "r\n"] {
            assert_eq!(session.apply_command(command), Err(GameError::InvalidDirection));
        }
        assert_eq!(session, before);
    }

    #[test]
    fn leaving_the_field_changes_nothing() {
        let mut session = session("*░\n░^");
        let before = session.clone();

        assert_eq!(session.apply_move(Direction::Up), Err(GameError::OutOfBounds));
        assert_eq!(session.apply_move(Direction::Left), Err(GameError::OutOfBounds));
        assert_eq!(session, before);

        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::Moved((0, 1))));
        assert_eq!(session.apply_command("r"), Err(GameError::OutOfBounds));
        assert_eq!(session.apply_command("u"), Err(GameError::OutOfBounds));
        assert_unchanged(&session, (0, 1));
    }

    #[test]
    fn empty_cell_becomes_path() {
        let mut session = session("*░░\n░░░\n░░^");

        assert_eq!(session.apply_move(Direction::Down), Ok(MoveOutcome::Moved((1, 0))));
        assert_eq!(session.field()[(1, 0)], Cell::Path);
        assert_unchanged(&session, (1, 0));
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn walking_back_over_path_is_allowed() {
        let mut session = session("*░\n░^");

        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::Moved((0, 1))));
        assert_eq!(session.apply_command("l"), Ok(MoveOutcome::Moved(START)));
        assert_unchanged(&session, START);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn only_won_and_lost_are_finished() {
        assert!(!SessionState::InProgress.is_finished());
        assert!(SessionState::Won.is_finished());
        assert!(SessionState::Lost.is_finished());
    }

    #[test]
    fn move_count_saturates() {
        let mut session = session("*░\n░^");
        session.move_count = u32::MAX;

        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::Moved((0, 1))));
        assert_eq!(session.move_count(), u32::MAX);
    }

    #[test]
    fn hole_loses() {
        let mut session = session("*O\n░^");

        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::FellInHole));
        assert!(session.fell_in_hole());
        assert!(!session.reached_hat());
        assert!(session.is_terminal());
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.position(), START);
        assert_eq!(session.field()[(0, 1)], Cell::Hole);
    }

    #[test]
    fn hat_wins() {
        let mut session = session("*^\n░░");

        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::FoundHat));
        assert!(session.reached_hat());
        assert!(!session.fell_in_hole());
        assert!(session.is_terminal());
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.position(), START);
    }

    #[test]
    fn finished_session_rejects_moves() {
        let mut session = session("*O\n░^");
        session.apply_command("r").unwrap();
        let before = session.clone();

        assert_eq!(session.apply_command("d"), Err(GameError::AlreadyEnded));
        assert_eq!(session.apply_command("x"), Err(GameError::InvalidDirection));
        assert_eq!(session, before);
    }

    #[test]
    fn walled_corner_loses_on_first_step() {
        let mut session = session("*O░\nO░░\n░░^");

        assert!(!is_solvable(session.field()));
        assert_eq!(session.apply_command("r"), Ok(MoveOutcome::FellInHole));
        assert_eq!(session.state(), SessionState::Lost);
    }

    #[test]
    fn path_around_holes_reaches_hat() {
        let mut session = session("*░░\nOO░\n░░^");
        let mut positions = Vec::new();

        for command in ["r", "r", "d"] {
            let outcome = session.apply_command(command).unwrap();
            assert!(!outcome.is_finished());
            positions.push(session.position());
        }
        assert_eq!(positions, [(0, 1), (0, 2), (1, 2)]);

        assert_eq!(session.apply_command("d"), Ok(MoveOutcome::FoundHat));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.position(), (1, 2));
        assert_eq!(session.field().to_string(), "***\nOO*\n░░^\n");
    }

    #[test]
    fn generated_session_is_playable() {
        let mut generator = RandomFieldGenerator::from_seed(5);
        let session = GameSession::generate(&mut generator, 10).unwrap();

        assert_unchanged(&session, START);
        assert_eq!(session.field().size(), 10);
        assert!(is_solvable(session.field()));
    }
}
