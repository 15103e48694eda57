use crate::board::{Board, Player};
use crate::error::Result;
use crate::random::RandomGenerator;
use tracing::trace;

/// Result of a playout, seen from the perspective player.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// The perspective player completed four in a row.
    Win,
    /// The opponent completed four in a row.
    Loss,
    /// The board filled up, or the ply cap was reached.
    Draw,
}

/// Plays boards to the end with uniformly random moves for both sides.
#[derive(Debug, Clone, Copy)]
pub struct RolloutPolicy {
    perspective: Player,
    max_plies: u32,
}

impl RolloutPolicy {
    pub fn new(perspective: Player, max_plies: u32) -> Self {
        Self {
            perspective,
            max_plies,
        }
    }

    /// Plays a private copy of `board` to a terminal state, `to_move` moving first.
    ///
    /// Each ply first checks whether the player who just moved has won or the
    /// board is full, then drops a piece into a random legal column.
    pub fn run<K: RandomGenerator>(
        &self,
        board: &Board,
        to_move: Player,
        random: &mut K,
    ) -> Result<Outcome> {
        let mut board = *board;
        let mut to_move = to_move;

        for ply in 0..self.max_plies {
            let just_moved = to_move.opponent();
            if board.check_win(just_moved) {
                let outcome = self.score(just_moved);
                trace!(ply, ?outcome, "rollout finished");
                return Ok(outcome);
            }
            if board.check_draw() {
                trace!(ply, "rollout drawn");
                return Ok(Outcome::Draw);
            }

            let columns = board.legal_columns();
            let Some(&column) = random.choose(&columns) else {
                return Ok(Outcome::Draw);
            };
            board.drop_piece(column, to_move)?;
            to_move = to_move.opponent();
        }

        trace!(max_plies = self.max_plies, "rollout hit ply cap");
        Ok(Outcome::Draw)
    }

    fn score(&self, winner: Player) -> Outcome {
        if winner == self.perspective {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}
