use std::io::{BufRead, Write};

use tracing::instrument;

use crate::error::ConsoleError;
use crate::listing::join_or;
use crate::options::MatchOptions;
use crate::tictactoe::{FIRST_TO_MOVE, MarkerChoice, Match, Position, RoundResult, Side};

use super::Console;

/// Console front end for a Tic-Tac-Toe match against the computer.
#[derive(Debug)]
pub struct MatchTable<R, W> {
    console: Console<R, W>,
    game: Match,
    name: String,
}

impl<R: BufRead, W: Write> MatchTable<R, W> {
    /// Asks for the player's name and marker and sets up the match.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn seat(
        mut console: Console<R, W>,
        options: MatchOptions,
        seed: u64,
    ) -> Result<Self, ConsoleError> {
        let name = console.ask_name("Welcome to the Tic Tac Toe game! What's your name?")?;
        let choice = ask_marker_choice(&mut console)?;
        Ok(Self {
            console,
            game: Match::new(choice, options, seed),
            name,
        })
    }

    /// Returns the match engine.
    pub const fn game(&self) -> &Match {
        &self.game
    }

    /// Returns the console, consuming the table.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays matches until the player declines another.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn play(&mut self) -> Result<(), ConsoleError> {
        self.console.clear()?;
        self.display_welcome_message()?;

        loop {
            let champion = loop {
                self.play_round()?;
                self.game.tally();
                self.display_result()?;
                self.game.reset_board();
                if let Some(champion) = self.game.grand_champion() {
                    break champion;
                }
            };
            self.display_grand_champion(champion)?;

            if !self.play_again()? {
                break;
            }
            self.game.reset_board();
            self.game.reset_scores();
            self.console.clear()?;
            self.console.say("Let's play again!")?;
            self.console.blank()?;
        }

        self.console.say(format_args!(
            "Thanks for playing Tic Tac Toe, {} - goodbye!",
            self.name
        ))
    }

    fn side_name(&self, side: Side) -> &str {
        match side {
            Side::Human => &self.name,
            Side::Computer => self.game.computer_name(),
        }
    }

    fn display_welcome_message(&mut self) -> Result<(), ConsoleError> {
        self.console.say(format_args!(
            "Welcome to the Tic Tac Toe game, {}! You'll be playing against the droid {}. \
             First player with {} wins is the grand champion!",
            self.name,
            self.game.computer_name(),
            self.game.options.score_to_win
        ))?;
        self.console.blank()
    }

    fn display_board(&mut self) -> Result<(), ConsoleError> {
        self.console.say(format_args!(
            "You're playing as {}. {} is playing as {}.",
            self.game.player(Side::Human).marker,
            self.game.computer_name(),
            self.game.player(Side::Computer).marker
        ))?;
        self.console.blank()?;
        self.console.say(self.game.board)?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), ConsoleError> {
        while !self.game.is_round_over() {
            if self.game.is_human_turn() {
                self.console.clear()?;
                self.display_board()?;
                self.human_moves()?;
            } else {
                self.game.computer_moves()?;
            }
        }
        Ok(())
    }

    fn human_moves(&mut self) -> Result<(), ConsoleError> {
        let open = self.game.board.unmarked_positions();
        self.console
            .say(format_args!("Choose a square: {}", join_or(&open)))?;

        let position = loop {
            let answer = self.console.read_line()?;
            let chosen = answer
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(Position::new)
                .filter(|position| open.contains(position));
            if let Some(position) = chosen {
                break position;
            }
            self.console.say("Sorry, that's not a valid choice.")?;
        };

        self.game.human_moves(position)?;
        Ok(())
    }

    fn display_result(&mut self) -> Result<(), ConsoleError> {
        self.console.clear()?;
        self.display_board()?;

        match self.game.round_result() {
            RoundResult::Winner(side) => {
                let winner = self.side_name(side).to_owned();
                self.console.say(format_args!("{winner} won!"))?;
            }
            RoundResult::Tie => self.console.say("It's a tie!")?,
        }

        self.console.say(format_args!(
            "{} has {} wins. {} has {} wins.",
            self.name,
            self.game.player(Side::Human).score,
            self.game.computer_name(),
            self.game.player(Side::Computer).score
        ))
    }

    fn display_grand_champion(&mut self, champion: Side) -> Result<(), ConsoleError> {
        let score = self.game.player(champion).score;
        match champion {
            Side::Human => self.console.say(format_args!(
                "With {score} wins, {} is the grand champion! Congrats on beating the robots!",
                self.name
            )),
            Side::Computer => self.console.say(format_args!(
                "With {score} wins, {} is the grand champion. Better luck next time, human!",
                self.game.computer_name()
            )),
        }
    }

    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        loop {
            let answer = self
                .console
                .ask("Would you like to play again? (enter y for yes, n for no)")?
                .to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.console.say("Sorry, answer must be y or n")?,
            }
        }
    }
}

fn ask_marker_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MarkerChoice, ConsoleError> {
    loop {
        let answer = console.ask(format_args!(
            "Enter X to play as 'X', O to play as 'O', or C to let the computer choose for you. \
             '{}' goes first.",
            FIRST_TO_MOVE
        ))?;
        if let Some(choice) = MarkerChoice::parse(&answer) {
            return Ok(choice);
        }
        console.say("Sorry, please enter X, O, or C.")?;
    }
}
