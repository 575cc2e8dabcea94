use std::io::{BufRead, Write};

use tracing::instrument;

use crate::error::ConsoleError;
use crate::hand::MAX_HAND_VALUE;
use crate::result::HandOutcome;
use crate::twenty_one::{DealerAction, TurnState, TwentyOne};

use super::Console;

/// Console front end for 21: one named player against the dealer.
#[derive(Debug)]
pub struct TwentyOneTable<R, W> {
    console: Console<R, W>,
    game: TwentyOne,
    name: String,
}

impl<R: BufRead, W: Write> TwentyOneTable<R, W> {
    /// Asks for the player's name and seats them at `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn seat(mut console: Console<R, W>, game: TwentyOne) -> Result<Self, ConsoleError> {
        let name = console.ask_name("Welcome! What's your name?")?;
        Ok(Self {
            console,
            game,
            name,
        })
    }

    /// Returns the game engine.
    pub const fn game(&self) -> &TwentyOne {
        &self.game
    }

    /// Returns the game engine for rearranging the deck.
    pub const fn game_mut(&mut self) -> &mut TwentyOne {
        &mut self.game
    }

    /// Returns the console, consuming the table.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays hands until the player declines another.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the deck runs out.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn play(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.show_welcome_message()?;
            self.game.deal()?;
            self.show_initial_cards()?;
            self.player_turn()?;
            if !self.game.player().is_busted() {
                self.dealer_turn()?;
            }
            self.show_final_cards()?;
            self.show_result()?;
            if !self.play_again()? {
                break;
            }
            self.game.reset();
        }

        self.console.say(format_args!(
            "Thank you for playing {MAX_HAND_VALUE}! Goodbye!"
        ))
    }

    fn show_welcome_message(&mut self) -> Result<(), ConsoleError> {
        self.console.say(format_args!(
            "Welcome to the {MAX_HAND_VALUE} game, {}! The computer will be the dealer in this game.",
            self.name
        ))
    }

    fn show_player_hand(&mut self) -> Result<(), ConsoleError> {
        self.console
            .say(format_args!("{} has: {}.", self.name, self.game.player()))
    }

    fn show_dealer_hand(&mut self) -> Result<(), ConsoleError> {
        self.console
            .say(format_args!("Dealer has: {}.", self.game.dealer()))
    }

    fn show_initial_cards(&mut self) -> Result<(), ConsoleError> {
        if let Some(up_card) = self.game.dealer().first().copied() {
            self.console
                .say(format_args!("Dealer has: {up_card} and unknown card."))?;
        }
        self.show_player_hand()
    }

    fn player_turn(&mut self) -> Result<(), ConsoleError> {
        while self.game.state() == TurnState::PlayerTurn {
            let answer = self
                .console
                .ask("Enter 'h' to hit or 's' to stay.")?
                .to_lowercase();

            match answer.as_str() {
                "h" => {
                    self.console.say("You chose to hit!")?;
                    self.game.hit()?;
                    self.show_player_hand()?;
                }
                "s" => {
                    self.console.say("You chose to stay. Dealer's turn!")?;
                    self.game.stay()?;
                }
                _ => self.console.say("Sorry, that's not a valid choice.")?,
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self) -> Result<(), ConsoleError> {
        while self.game.state() == TurnState::DealerTurn {
            match self.game.dealer_step()? {
                DealerAction::Hit(_) => {
                    self.console.say("Dealer hit!")?;
                    self.show_dealer_hand()?;
                }
                DealerAction::Stand => self.console.say("Dealer stays.")?,
            }
        }
        Ok(())
    }

    fn show_final_cards(&mut self) -> Result<(), ConsoleError> {
        if self.game.reveals_dealer_at_showdown() {
            self.show_dealer_hand()?;
        }
        if !self.game.player().is_busted() {
            self.show_player_hand()?;
        }
        Ok(())
    }

    fn show_result(&mut self) -> Result<(), ConsoleError> {
        let result = self.game.showdown()?;
        let name = &self.name;
        match result.outcome {
            HandOutcome::PlayerBusted => self
                .console
                .say(format_args!("{name} busted - Dealer wins!")),
            HandOutcome::DealerBusted => self
                .console
                .say(format_args!("Dealer busted - {name} wins!")),
            HandOutcome::PlayerWins => self.console.say(format_args!("{name} wins!")),
            HandOutcome::DealerWins => self.console.say("Dealer wins!"),
            HandOutcome::Tie => self.console.say("It's a tie!"),
        }
    }

    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        let answer = loop {
            let answer = self
                .console
                .ask("Would you like to play again? Enter 'y' for yes, 'n' for no.")?
                .to_lowercase();
            if answer.starts_with('y') || answer.starts_with('n') {
                break answer;
            }
            self.console.say("Sorry, please enter 'y' or 'n'.")?;
        };
        self.console.clear()?;
        Ok(answer.starts_with('y'))
    }
}
