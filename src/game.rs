//! Move-history management on top of the board rules
//!
//! A [`Game`] is a replayable record of moves. Board states are derived
//! by replaying the history against a fresh board rather than stored,
//! so the record can never drift out of sync with the rules.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Action, Board, Player},
    error::Error,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome has been recorded, and
    /// any rules error for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let mover = current.player()?;
        let next = current.result(action)?;

        self.moves.push(Move {
            action,
            player: mover,
        });

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if any move in the history is invalid for the
    /// state it is applied to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        let mut state = Board::new();
        for m in self.moves.iter().take(end_index) {
            state = state.result(m.action)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded history is corrupted.
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board to the
    /// current position
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded history is corrupted.
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_the_mover() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn test_play_to_a_win() {
        let mut game = Game::new();
        for action in [
            Action::new(0, 0), // X
            Action::new(1, 0), // O
            Action::new(0, 1), // X
            Action::new(1, 1), // O
            Action::new(0, 2), // X wins top row
        ] {
            game.play(action).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));

        // No moves accepted after the game is decided
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_play_to_a_draw() {
        let mut game = Game::new();
        for action in [
            Action::new(0, 0), // X
            Action::new(0, 1), // O
            Action::new(0, 2), // X
            Action::new(1, 1), // O
            Action::new(1, 0), // X
            Action::new(2, 0), // O
            Action::new(1, 2), // X
            Action::new(2, 2), // O
            Action::new(2, 1), // X
        ] {
            game.play(action).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert!(game.current_state().unwrap().is_draw());
    }

    #[test]
    fn test_illegal_move_leaves_history_untouched() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();

        assert!(game.play(Action::new(1, 1)).is_err());
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_state_sequence() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        game.play(Action::new(1, 1)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], Board::new());
        assert_eq!(states[1].encode(), "X........");
        assert_eq!(states[2].encode(), "X...O....");
    }
}
