//! Board reachability validation

use crate::board::{Board, Player};
use crate::lines::WINNING_LINES;

impl Board {
    /// Check if the position can arise through alternating play from an
    /// empty board.
    pub fn is_valid(&self) -> bool {
        let x_count = self
            .cells()
            .iter()
            .filter(|&&c| c == Player::X.to_cell())
            .count();
        let o_count = self
            .cells()
            .iter()
            .filter(|&&c| c == Player::O.to_cell())
            .count();

        // X opens, so X is either level or exactly one move ahead
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // The winner must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && o_count != x_count {
            return false;
        }

        // Multiple winning lines are only possible when a single move
        // completed all of them at once
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.to_cell();
        let winning: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells()[idx] == target))
            .collect();

        if winning.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning.iter().all(|line| line.contains(&pos)))
    }
}
