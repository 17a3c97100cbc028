use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::{AppConfig, DisplayConfig};
use crate::error::GameError;
use crate::game::{GameOutcome, GameState, MoveError};
use crate::history::HistoryStore;
use crate::ui::prompt::Prompter;
use crate::ui::render::{board_to_string, history_entry_to_string};

const BANNER: &str = "\
---------------------------------
------Welcome to Connect 4!------
---------------------------------
This is simply a game of PvP connect-4!

";

/// Text game session: plays games back to back until the players stop,
/// recording each finished game in the history.
pub struct App<R, W> {
    game_state: GameState,
    history: HistoryStore,
    display: DisplayConfig,
    games_played: usize,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        App {
            game_state: GameState::new(),
            history: HistoryStore::new(config.history.capacity),
            display: config.display.clone(),
            games_played: 0,
            prompter: Prompter::new(input, output),
        }
    }

    /// Main application loop
    pub fn run(&mut self) -> Result<(), GameError> {
        self.prompter.say(BANNER)?;

        loop {
            self.play_game()?;
            if !self
                .prompter
                .ask_yes_no("Would you like to play again (n\\y): ")?
            {
                break;
            }
        }

        if self.games_played > 1
            && self
                .prompter
                .ask_yes_no("Would you see the games you have played before you leave (n\\y): ")?
        {
            self.show_history()?;
        }

        self.prompter.say("Thank you for playing!\n")?;
        Ok(())
    }

    /// Play one game to completion and record it.
    pub fn play_game(&mut self) -> Result<GameOutcome, GameError> {
        self.games_played += 1;
        self.game_state.reset();
        self.prompter.say(&format!("Game {}\n", self.games_played))?;

        let outcome = loop {
            if let Some(outcome) = self.game_state.outcome() {
                break outcome;
            }
            self.print_board()?;
            self.take_turn()?;
        };

        match outcome {
            GameOutcome::Winner(player) => self.prompter.say(&format!(
                "Congratulations player {}! You win!\n",
                player.number()
            ))?,
            GameOutcome::Draw => self.prompter.say("The board is full, it's a draw!\n")?,
        }
        self.print_board()?;

        self.history
            .record(self.game_state.board(), self.game_state.winner());
        info!(
            game = self.games_played,
            outcome = ?outcome,
            stored = self.history.len(),
            "game finished"
        );

        Ok(outcome)
    }

    /// Ask the current player for a column until a token is placed.
    fn take_turn(&mut self) -> Result<(), GameError> {
        let player = self.game_state.current_player();
        let question = format!(
            ">>Player {}'s guess ({}): ",
            player.number(),
            self.display.token(player)
        );

        loop {
            let column = self.prompter.ask_column(&question)?;
            match self.game_state.apply_move(column) {
                Ok(row) => {
                    debug!(player = player.number(), column, row, "token placed");
                    return Ok(());
                }
                Err(MoveError::ColumnFull) => {
                    debug!(column, "column full");
                    self.prompter.say("Column is full, please try another.\n")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Print every stored game, oldest first
    fn show_history(&mut self) -> Result<(), GameError> {
        for entry in &self.history {
            let text = history_entry_to_string(entry, &self.display);
            self.prompter.say(&format!("\n\n{text}\n"))?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), GameError> {
        let text = board_to_string(self.game_state.board(), &self.display);
        self.prompter.say(&format!("\n\n{text}\n"))
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use std::io::Cursor;

    /// Player 1 wins vertically in column 1 after seven moves.
    const QUICK_WIN: &str = "1\n2\n1\n2\n1\n2\n1\n";

    type TestApp = App<Cursor<Vec<u8>>, Vec<u8>>;

    fn run_script(script: &str, config: &AppConfig) -> (Result<(), GameError>, TestApp) {
        let mut app = App::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), config);
        let result = app.run();
        (result, app)
    }

    fn output(app: TestApp) -> String {
        String::from_utf8(app.into_output()).unwrap()
    }

    #[test]
    fn test_single_game() {
        let script = format!("{QUICK_WIN}n\n");
        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();

        assert_eq!(app.games_played(), 1);
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history().latest().unwrap().winner, Some(Player::One));

        let out = output(app);
        assert!(out.starts_with("---------------------------------\n"));
        assert!(out.contains("Game 1\n"));
        assert!(out.contains(">>Player 1's guess (O): "));
        assert!(out.contains(">>Player 2's guess (X): "));
        assert!(out.contains("Congratulations player 1! You win!\n"));
        // A single game never offers the history review
        assert!(!out.contains("Would you see the games"));
        assert!(out.ends_with("Thank you for playing!\n"));
    }

    #[test]
    fn test_horizontal_win_for_player_two() {
        // Player 2 takes columns 1..=4 on the bottom row
        let script = "7\n1\n7\n2\n6\n3\n6\n4\nn\n";
        let (result, app) = run_script(script, &AppConfig::default());
        result.unwrap();
        assert_eq!(app.history().latest().unwrap().winner, Some(Player::Two));
        assert!(output(app).contains("Congratulations player 2! You win!\n"));
    }

    #[test]
    fn test_invalid_guesses_are_reprompted() {
        let script = format!("x\n0\n8\n{QUICK_WIN}n\n");
        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();
        assert_eq!(output(app).matches("Guess not valid: ").count(), 3);
    }

    #[test]
    fn test_full_column_is_reprompted() {
        // Fill column 3 without a win, then Player 1 tries it again
        let script = format!("3\n3\n3\n3\n3\n3\n3\n{QUICK_WIN}n\n");
        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();

        let board = app.history().latest().unwrap().board;
        assert_eq!(board.height(2), 6);
        let out = output(app);
        assert_eq!(out.matches("Column is full, please try another.\n").count(), 1);
        assert!(out.contains("Congratulations player 1! You win!\n"));
    }

    #[test]
    fn test_replay_answer_is_validated() {
        let script = format!("{QUICK_WIN}Y\nno\nn\n");
        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();
        assert_eq!(output(app).matches("Input not valid: ").count(), 2);
    }

    #[test]
    fn test_history_review_after_several_games() {
        let mut config = AppConfig::default();
        config.history.capacity = 2;
        let script = format!("{QUICK_WIN}y\n{QUICK_WIN}y\n{QUICK_WIN}n\ny\n");
        let (result, app) = run_script(&script, &config);
        result.unwrap();

        assert_eq!(app.games_played(), 3);
        let numbers: Vec<usize> = app.history().iter().map(|e| e.game_number).collect();
        assert_eq!(numbers, vec![2, 3]);

        let out = output(app);
        assert!(out.contains("Game 3\n"));
        assert!(!out.contains("Game 1: "));
        let second = out.find("Game 2: (Player 1 won this game)").unwrap();
        let third = out.find("Game 3: (Player 1 won this game)").unwrap();
        assert!(second < third);
    }

    #[test]
    fn test_history_review_declined() {
        let script = format!("{QUICK_WIN}y\n{QUICK_WIN}n\nn\n");
        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();

        let out = output(app);
        assert!(out.contains("Would you see the games you have played before you leave (n\\y): "));
        assert!(!out.contains("won this game"));
    }

    #[test]
    fn test_draw_is_recorded_without_winner() {
        let columns = [
            0, 1, 0, 0, 2, 0, 0, 1, 0, 3, 1, 3, 1, 1, 2, 1, 3, 2, 3, 2, 2, 3, 2, 3, 4, 5, 4, 4,
            6, 4, 4, 5, 5, 6, 5, 5, 4, 5, 6, 6, 6, 6,
        ];
        let mut script: String = columns.iter().map(|c| format!("{}\n", c + 1)).collect();
        script.push_str("n\n");

        let (result, app) = run_script(&script, &AppConfig::default());
        result.unwrap();
        assert_eq!(app.history().latest().unwrap().winner, None);
        assert!(output(app).contains("The board is full, it's a draw!\n"));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let (result, app) = run_script("1\n2\n", &AppConfig::default());
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert!(app.history().is_empty());
    }
}
