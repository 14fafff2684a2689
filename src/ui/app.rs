use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{
    MonteCarloAgent, StdRandomSource, HINT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
use crate::config::Settings;
use crate::game::{Board, COLS, GameStatus};
use crate::stats::Statistics;

pub struct App {
    board: Board,
    agent: MonteCarloAgent<StdRandomSource>,
    settings: Settings,
    stats: Statistics,
    selected_column: usize,
    hint_column: Option<usize>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(
        settings: Settings,
        stats: Statistics,
        agent: MonteCarloAgent<StdRandomSource>,
    ) -> Self {
        App {
            board: Board::new(),
            agent,
            settings,
            stats,
            selected_column: COLS / 2,
            hint_column: None,
            should_quit: false,
            message: None,
        }
    }

    /// Settings as adjusted during the session, for saving on exit.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Statistics accumulated up to now, for saving on exit.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Main application loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.board.status().is_terminal() {
                    self.next_game();
                } else {
                    self.human_move(self.selected_column);
                }
            }
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('h') => self.hint(),
            KeyCode::Char('c') => {
                self.clear_grid();
                self.message = Some("Grid cleared.".to_string());
            }
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_difficulty(1),
            KeyCode::Char('-') => self.adjust_difficulty(-1),
            KeyCode::Char('s') => {
                self.stats.reset(self.settings.mode());
                self.message = Some("Statistics reset.".to_string());
            }
            _ => {}
        }
    }

    /// A human drop in `column`; in one-player mode a successful move is
    /// answered by the computer.
    fn human_move(&mut self, column: usize) {
        self.hint_column = None;

        if !self.board.insert(column) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        if self.board.status().is_terminal() {
            self.record_outcome();
            return;
        }

        if self.settings.one_player {
            self.computer_move();
        }
    }

    /// The computer answers for Black.
    fn computer_move(&mut self) {
        let Ok(column) =
            self.agent
                .choose_column(GameStatus::BlackWins, self.settings.difficulty, &self.board)
        else {
            // Only reachable if a caller ignored a terminal status.
            return;
        };

        self.board.insert(column);

        if self.board.status().is_terminal() {
            self.record_outcome();
        }
    }

    /// Start the next game; the starter alternates, and when the computer
    /// gets the first move it takes it immediately.
    fn next_game(&mut self) {
        self.hint_column = None;
        self.board.reset(false);

        if self.settings.one_player && self.board.status() == GameStatus::BlackTurn {
            self.computer_move();
        }
    }

    /// Ask the agent where the side to move should go, at full sampling
    /// strength. In one-player mode Black gets no help against its own
    /// player.
    fn hint(&mut self) {
        let allowed = match self.board.status() {
            GameStatus::RedTurn => true,
            GameStatus::BlackTurn => !self.settings.one_player,
            _ => false,
        };
        if !allowed {
            return;
        }

        // Checked above: the game is ongoing.
        let target = self.board.status().winning_status().unwrap();

        self.stats.mode_mut(self.settings.mode()).hints += 1;

        if let Ok(column) = self.agent.choose_column(target, HINT_DIFFICULTY, &self.board) {
            self.hint_column = Some(column);
            self.selected_column = column;
        }
    }

    /// Take back the last move. Against the computer this retracts the
    /// whole exchange (its reply and the human move), and needs two
    /// entries on the undo stack to start.
    fn undo(&mut self) {
        if self.settings.one_player && self.board.available_undo_count() < 2 {
            return;
        }

        if self.board.undo() {
            self.stats.mode_mut(self.settings.mode()).undos += 1;

            if self.settings.one_player && self.board.status() == GameStatus::BlackTurn {
                self.board.undo();
            }

            self.hint_column = None;
        }
    }

    /// Abandon the current game and start fresh (Red first). Only counts
    /// as a clear when there was something on the grid.
    fn clear_grid(&mut self) {
        if self.board.available_undo_count() > 0 {
            self.stats.mode_mut(self.settings.mode()).clears += 1;
        }

        self.hint_column = None;
        self.board.reset(true);
    }

    fn toggle_mode(&mut self) {
        // The clear is charged to the mode being left.
        self.clear_grid();
        self.settings.one_player = !self.settings.one_player;
        self.message = Some(
            if self.settings.one_player {
                "One player mode."
            } else {
                "Two player mode."
            }
            .to_string(),
        );
    }

    fn adjust_difficulty(&mut self, delta: i32) {
        let adjusted = (self.settings.difficulty as i32 + delta)
            .clamp(MIN_DIFFICULTY as i32, MAX_DIFFICULTY as i32);
        self.settings.difficulty = adjusted as u32;
        self.message = Some(format!("Difficulty: {}", self.settings.difficulty));
    }

    /// Tally a finished game and announce it.
    fn record_outcome(&mut self) {
        let one_player = self.settings.one_player;
        let bucket = self.stats.mode_mut(self.settings.mode());

        self.message = Some(
            match self.board.status() {
                GameStatus::RedWins => {
                    bucket.wins += 1;
                    if one_player {
                        "Congrats! You win."
                    } else {
                        "Red wins!"
                    }
                }
                GameStatus::BlackWins => {
                    bucket.losses += 1;
                    if one_player {
                        "Computer wins."
                    } else {
                        "Black wins!"
                    }
                }
                GameStatus::Tie => {
                    bucket.ties += 1;
                    "Tie game."
                }
                // Only called on terminal statuses.
                GameStatus::RedTurn | GameStatus::BlackTurn => unreachable!(),
            }
            .to_string(),
        );
    }

    fn status_line(&self) -> String {
        let mode = if self.settings.one_player {
            "One Player"
        } else {
            "Two Player"
        };
        let status = match (self.board.status(), self.settings.one_player) {
            (GameStatus::RedTurn, true) => "You",
            (GameStatus::RedTurn, false) => "Red",
            (GameStatus::BlackTurn, true) => "Wait",
            (GameStatus::BlackTurn, false) => "Black",
            (GameStatus::RedWins, true) => "You Win!",
            (GameStatus::RedWins, false) => "Red Wins!",
            (GameStatus::BlackWins, true) => "Computer Wins",
            (GameStatus::BlackWins, false) => "Black Wins!",
            (GameStatus::Tie, _) => "Tie Game",
        };
        format!("{status}  |  {mode}")
    }

    fn stats_line(&self) -> String {
        let bucket = self.stats.mode(self.settings.mode());
        if self.settings.one_player {
            format!(
                "{} Win, {} Loss, {} Tie, {}% Success",
                bucket.wins,
                bucket.losses,
                bucket.ties,
                bucket.success_rate()
            )
        } else {
            format!(
                "{} Red, {} Black, {} Tie",
                bucket.wins, bucket.losses, bucket.ties
            )
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            self.selected_column,
            self.hint_column,
            &self.status_line(),
            &self.stats_line(),
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GameMode;

    fn test_app(one_player: bool) -> App {
        let settings = Settings {
            one_player,
            // Cheap sampling keeps computer replies fast under test.
            difficulty: 0,
        };
        App::new(
            settings,
            Statistics::default(),
            MonteCarloAgent::new(StdRandomSource::seeded(9)),
        )
    }

    #[test]
    fn test_one_player_move_draws_a_reply() {
        let mut app = test_app(true);
        app.human_move(3);

        // One red piece, one black reply.
        assert_eq!(app.board.available_undo_count(), 2);
        assert_eq!(app.board.status(), GameStatus::RedTurn);
    }

    #[test]
    fn test_two_player_move_stands_alone() {
        let mut app = test_app(false);
        app.human_move(3);

        assert_eq!(app.board.available_undo_count(), 1);
        assert_eq!(app.board.status(), GameStatus::BlackTurn);
    }

    #[test]
    fn test_rejected_move_reports_full_column() {
        let mut app = test_app(false);
        for _ in 0..6 {
            app.human_move(0);
        }
        app.message = None;
        app.human_move(0);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_undo_against_computer_needs_a_full_exchange() {
        let mut app = test_app(true);

        // Nothing to undo yet; gated out.
        app.undo();
        assert_eq!(app.stats.mode(GameMode::OnePlayer).undos, 0);

        app.human_move(3);
        assert_eq!(app.board.available_undo_count(), 2);

        // Retracts both the reply and the human move, counted once.
        app.undo();
        assert_eq!(app.board.available_undo_count(), 0);
        assert_eq!(app.board.status(), GameStatus::RedTurn);
        assert_eq!(app.stats.mode(GameMode::OnePlayer).undos, 1);
    }

    #[test]
    fn test_undo_two_player_takes_one_ply() {
        let mut app = test_app(false);
        app.human_move(3);
        app.human_move(4);

        app.undo();
        assert_eq!(app.board.available_undo_count(), 1);
        assert_eq!(app.board.status(), GameStatus::BlackTurn);
    }

    #[test]
    fn test_clear_counts_only_with_pieces_down() {
        let mut app = test_app(false);

        app.clear_grid();
        assert_eq!(app.stats.mode(GameMode::TwoPlayer).clears, 0);

        app.human_move(2);
        app.clear_grid();
        assert_eq!(app.stats.mode(GameMode::TwoPlayer).clears, 1);
        assert_eq!(app.board.status(), GameStatus::RedTurn);
        assert_eq!(app.board.available_undo_count(), 0);
    }

    #[test]
    fn test_outcome_recorded_in_two_player() {
        let mut app = test_app(false);
        // Red: 0,1,2,3 along the bottom wins.
        for col in 0..3 {
            app.human_move(col); // Red
            app.human_move(col); // Black on top
        }
        app.human_move(3);

        assert_eq!(app.board.status(), GameStatus::RedWins);
        assert_eq!(app.stats.mode(GameMode::TwoPlayer).wins, 1);
        assert_eq!(app.message.as_deref(), Some("Red wins!"));
    }

    #[test]
    fn test_next_game_alternates_and_computer_opens() {
        let mut app = test_app(true);
        // Finish a game quickly: in one-player mode the human win below
        // is deterministic only in board terms, so force one via the
        // two-player path first.
        app.settings.one_player = false;
        for col in 0..3 {
            app.human_move(col);
            app.human_move(col);
        }
        app.human_move(3);
        assert!(app.board.status().is_terminal());

        // Back to one-player for the handover: Black starts the next
        // game, so the computer should already have played its opener.
        app.settings.one_player = true;
        app.next_game();
        assert_eq!(app.board.status(), GameStatus::RedTurn);
        assert_eq!(app.board.available_undo_count(), 1);
    }

    #[test]
    fn test_hint_marks_a_column_and_counts() {
        let mut app = test_app(false);
        app.hint();

        assert!(app.hint_column.is_some());
        assert!(app.hint_column.unwrap() < COLS);
        assert_eq!(app.selected_column, app.hint_column.unwrap());
        assert_eq!(app.stats.mode(GameMode::TwoPlayer).hints, 1);
    }

    #[test]
    fn test_no_hint_for_the_computer() {
        let mut app = test_app(true);
        app.settings.one_player = false;
        app.human_move(3); // Black to move now
        app.settings.one_player = true;

        app.hint();
        assert!(app.hint_column.is_none());
        assert_eq!(app.stats.mode(GameMode::OnePlayer).hints, 0);
    }

    #[test]
    fn test_difficulty_adjustment_clamps() {
        let mut app = test_app(true);
        app.settings.difficulty = MAX_DIFFICULTY;
        app.adjust_difficulty(1);
        assert_eq!(app.settings.difficulty, MAX_DIFFICULTY);

        app.settings.difficulty = MIN_DIFFICULTY;
        app.adjust_difficulty(-1);
        assert_eq!(app.settings.difficulty, MIN_DIFFICULTY);
    }

    #[test]
    fn test_mode_toggle_charges_clear_to_old_mode() {
        let mut app = test_app(true);
        app.settings.one_player = false;
        app.human_move(2);

        app.toggle_mode();
        assert!(app.settings.one_player);
        assert_eq!(app.stats.mode(GameMode::TwoPlayer).clears, 1);
        assert_eq!(app.stats.mode(GameMode::OnePlayer).clears, 0);
    }
}
