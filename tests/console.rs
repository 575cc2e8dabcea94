//! End-to-end console sessions driven by scripted input.

use parlor::{
    Card, Console, ConsoleError, Deck, MatchOptions, MatchTable, Suit, TwentyOne, TwentyOneTable,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn console(script: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(script.as_bytes(), Vec::new())
}

fn transcript<R>(console: Console<R, Vec<u8>>) -> String
where
    R: std::io::BufRead,
{
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn twenty_one_player_stays_and_wins() {
    let mut table = TwentyOneTable::seat(console("\nAlice\nS\nmaybe\nno\n"), TwentyOne::new(1))
        .unwrap();
    table.game_mut().deck = Deck::stacked(&[
        card(Suit::Hearts, 10),   // player
        card(Suit::Clubs, 8),     // dealer
        card(Suit::Spades, 9),    // player
        card(Suit::Diamonds, 13), // dealer
    ]);

    table.play().unwrap();
    let out = transcript(table.into_console());

    assert!(out.contains("Sorry, please enter a name."));
    assert!(out.contains(
        "Welcome to the 21 game, Alice! The computer will be the dealer in this game."
    ));
    assert!(out.contains("Dealer has: 8 of Clubs and unknown card."));
    assert!(out.contains("Alice has: 10 of Hearts and 9 of Spades (total: 19)."));
    assert!(out.contains("You chose to stay. Dealer's turn!"));
    assert!(out.contains("Dealer stays."));
    assert!(!out.contains("Dealer hit!"));
    assert!(out.contains("Dealer has: 8 of Clubs and King of Diamonds (total: 18)."));
    assert!(out.contains("Alice wins!"));
    assert!(out.contains("Sorry, please enter 'y' or 'n'."));
    assert!(out.ends_with("Thank you for playing 21! Goodbye!\n"));
}

#[test]
fn twenty_one_bust_reveals_dealer_and_skips_dealer_turn() {
    let mut table =
        TwentyOneTable::seat(console("Bob\nx\nh\n"), TwentyOne::new(2)).unwrap();
    table.game_mut().deck = Deck::stacked(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 2),    // dealer
        card(Suit::Spades, 6),   // player
        card(Suit::Diamonds, 3), // dealer
        card(Suit::Hearts, 9),   // player hit
    ]);

    // Input ends at the replay prompt.
    let err = table.play().unwrap_err();
    assert!(matches!(err, ConsoleError::InputClosed));

    let out = transcript(table.into_console());
    assert!(out.contains("Sorry, that's not a valid choice."));
    assert!(out.contains("You chose to hit!"));
    assert!(out.contains("Bob has: 10 of Hearts, 6 of Spades, and 9 of Hearts (total: 25)."));
    assert!(!out.contains("Dealer stays."));
    assert!(out.contains("Dealer has: 2 of Clubs and 3 of Diamonds (total: 5)."));
    assert!(out.contains("Bob busted - Dealer wins!"));
}

#[test]
fn twenty_one_dealer_hits_until_bust() {
    let mut table = TwentyOneTable::seat(console("Cy\ns\nn\n"), TwentyOne::new(3)).unwrap();
    table.game_mut().deck = Deck::stacked(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 10),   // dealer
        card(Suit::Spades, 8),   // player
        card(Suit::Diamonds, 6), // dealer
        card(Suit::Hearts, 7),   // dealer hit
    ]);

    table.play().unwrap();
    let out = transcript(table.into_console());

    assert!(out.contains("Dealer hit!"));
    assert!(out.contains("Dealer has: 10 of Clubs, 6 of Diamonds, and 7 of Hearts (total: 23)."));
    assert!(out.contains("Dealer busted - Cy wins!"));
    // The busted dealer hand is shown once, while drawing.
    assert_eq!(out.matches("(total: 23)").count(), 1);
}

#[test]
fn tictactoe_match_plays_to_champion_and_replays() {
    let script = "Alice\nq\nx\n1\n2\nfoo\n2\n9\nmaybe\ny\n1\n2\n9\nn\n";
    let options = MatchOptions::default().with_score_to_win(1);
    let mut table = MatchTable::seat(console(script), options, 5).unwrap();
    let droid = table.game().computer_name();

    table.play().unwrap();
    let out = transcript(table.into_console());

    assert!(out.contains("Sorry, please enter X, O, or C."));
    assert!(out.contains(&format!(
        "Welcome to the Tic Tac Toe game, Alice! You'll be playing against the droid {droid}. \
         First player with 1 wins is the grand champion!"
    )));
    assert!(out.contains(&format!("You're playing as X. {droid} is playing as O.")));
    assert!(out.contains("Choose a square: 1, 2, 3, 4, 5, 6, 7, 8, or 9"));
    assert!(out.contains("Choose a square: 4, 6, 7, 8, or 9"));
    assert_eq!(out.matches("Sorry, that's not a valid choice.").count(), 2);
    assert_eq!(out.matches(&format!("{droid} won!")).count(), 2);
    assert!(out.contains(&format!("Alice has 0 wins. {droid} has 1 wins.")));
    assert_eq!(
        out.matches(&format!(
            "With 1 wins, {droid} is the grand champion. Better luck next time, human!"
        ))
        .count(),
        2
    );
    assert!(out.contains("Sorry, answer must be y or n"));
    assert!(out.contains("Let's play again!"));
    assert!(out.ends_with("Thanks for playing Tic Tac Toe, Alice - goodbye!\n"));
}
