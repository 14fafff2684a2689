use crate::error::AgentError;
use crate::game::{Board, Cell, GameStatus, COLS};

use super::random_source::RandomSource;

pub const MIN_DIFFICULTY: u32 = 0;
pub const MAX_DIFFICULTY: u32 = 10;
/// Sampling budget used for hint requests: the top of the range.
pub const HINT_DIFFICULTY: u32 = MAX_DIFFICULTY;

/// Outcome tallies for one column under consideration. Lives only for the
/// duration of a single [`MonteCarloAgent::choose_column`] call.
struct Candidate {
    column: usize,
    wins: u32,
    ties: u32,
}

/// Picks columns by randomized playout sampling.
///
/// For each open column the agent repeatedly clones the board, drops a
/// piece there, plays both sides uniformly at random to the end, and
/// tallies how often the requested side wins or ties. Higher difficulty
/// buys exponentially more playouts. This is a sampler, not a solver: it
/// estimates which column looks best, it proves nothing.
pub struct MonteCarloAgent<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> MonteCarloAgent<R> {
    pub fn new(rng: R) -> Self {
        MonteCarloAgent { rng }
    }

    /// Choose a column for the side whose win is `target`.
    ///
    /// `target` must be `RedWins` or `BlackWins`; it aims the sampling
    /// both for the computer's own move and for hints on a human's
    /// behalf. `difficulty` is clamped to the supported range and sets
    /// the base budget at `2^difficulty` playouts per candidate.
    ///
    /// Fails with [`AgentError::NoMovesAvailable`] when every column is
    /// full; callers are expected to check the game is still ongoing
    /// first.
    pub fn choose_column(
        &mut self,
        target: GameStatus,
        difficulty: u32,
        board: &Board,
    ) -> Result<usize, AgentError> {
        debug_assert!(
            matches!(target, GameStatus::RedWins | GameStatus::BlackWins),
            "target must be a winning status"
        );

        let mut candidates: Vec<Candidate> = (0..COLS)
            .filter(|&col| board.hole(0, col) == Cell::Empty)
            .map(|column| Candidate {
                column,
                wins: 0,
                ties: 0,
            })
            .collect();

        if candidates.is_empty() {
            return Err(AgentError::NoMovesAvailable);
        }

        // Nothing to rank with a single open column.
        if candidates.len() == 1 {
            return Ok(candidates[0].column);
        }

        let difficulty = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        let mut samples = 1usize << difficulty;

        // Refinement rounds: tallies accumulate while the per-round budget
        // halves, so a statistically tied field keeps gathering evidence
        // until the budget runs out and a choice is forced.
        loop {
            for _ in 0..samples {
                for candidate in candidates.iter_mut() {
                    self.sample_playout(candidate, target, board);
                }
            }

            samples /= 2;

            if let Some(column) = self.best_candidate(&candidates, samples == 0) {
                return Ok(column);
            }
        }
    }

    /// One playout seeded by the candidate's column, tallied against the
    /// target outcome.
    fn sample_playout(&mut self, candidate: &mut Candidate, target: GameStatus, board: &Board) {
        let mut sim = board.clone();
        sim.insert(candidate.column);

        let outcome = self.finish_game(&mut sim);

        if outcome == target {
            candidate.wins += 1;
        } else if outcome == GameStatus::Tie {
            candidate.ties += 1;
        }
    }

    /// Play uniformly random legal moves for both sides until the game
    /// ends.
    fn finish_game(&mut self, game: &mut Board) -> GameStatus {
        let mut open = Vec::with_capacity(COLS);

        while !game.status().is_terminal() {
            open.clear();
            for col in 0..COLS {
                if game.hole(0, col) == Cell::Empty {
                    open.push(col);
                }
            }

            game.insert(open[self.rng.next_below(open.len())]);
        }

        game.status()
    }

    /// Scan for a uniquely best candidate: most wins first, most ties
    /// among winless fields second. A shared maximum defers to the next
    /// round, except on the final round, where the tie is broken at
    /// random among the front-runners.
    fn best_candidate(&mut self, candidates: &[Candidate], final_round: bool) -> Option<usize> {
        let mut best: Option<&Candidate> = None;
        let mut best_wins = 0;
        let mut best_ties = 0;

        for candidate in candidates {
            if candidate.wins > best_wins {
                best_wins = candidate.wins;
                best = Some(candidate);
            } else if best_wins > 0 {
                // Ranking on wins; ties no longer matter.
                if candidate.wins == best_wins {
                    best = None;
                }
            } else if candidate.ties > best_ties {
                best_ties = candidate.ties;
                best = Some(candidate);
            } else if candidate.ties == best_ties {
                best = None;
            }
        }

        match best {
            Some(candidate) => Some(candidate.column),
            None if final_round => Some(self.narrow(candidates, best_wins, best_ties)),
            None => None,
        }
    }

    /// Forced narrowing: collect every candidate matching the relevant
    /// maximum and pick one uniformly at random.
    fn narrow(&mut self, candidates: &[Candidate], best_wins: u32, best_ties: u32) -> usize {
        let finalists: Vec<usize> = if best_wins == 0 {
            candidates
                .iter()
                .filter(|c| c.ties == best_ties)
                .map(|c| c.column)
                .collect()
        } else {
            candidates
                .iter()
                .filter(|c| c.wins == best_wins)
                .map(|c| c.column)
                .collect()
        };

        finalists[self.rng.next_below(finalists.len())]
    }
}
