/// Contents of a single hole in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Black,
}

/// Whole-game status: whose turn it is while play continues, or how the
/// game ended. Transitions happen only through [`Board::insert`],
/// [`Board::undo`] and [`Board::reset`].
///
/// [`Board::insert`]: super::Board::insert
/// [`Board::undo`]: super::Board::undo
/// [`Board::reset`]: super::Board::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    RedTurn,
    BlackTurn,
    RedWins,
    BlackWins,
    Tie,
}

impl GameStatus {
    /// True once the game has ended; the board accepts no further inserts.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::RedWins | GameStatus::BlackWins | GameStatus::Tie
        )
    }

    /// The winning status for the side to move, if the game is ongoing.
    /// Used to aim the agent: for its own move or for a hint.
    pub fn winning_status(self) -> Option<GameStatus> {
        match self {
            GameStatus::RedTurn => Some(GameStatus::RedWins),
            GameStatus::BlackTurn => Some(GameStatus::BlackWins),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::RedTurn.is_terminal());
        assert!(!GameStatus::BlackTurn.is_terminal());
        assert!(GameStatus::RedWins.is_terminal());
        assert!(GameStatus::BlackWins.is_terminal());
        assert!(GameStatus::Tie.is_terminal());
    }

    #[test]
    fn test_winning_status_for_side_to_move() {
        assert_eq!(
            GameStatus::RedTurn.winning_status(),
            Some(GameStatus::RedWins)
        );
        assert_eq!(
            GameStatus::BlackTurn.winning_status(),
            Some(GameStatus::BlackWins)
        );
        assert_eq!(GameStatus::Tie.winning_status(), None);
        assert_eq!(GameStatus::RedWins.winning_status(), None);
    }
}
