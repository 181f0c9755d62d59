//! Local card source tests.

use std::collections::HashSet;

use deckjack::{
    Advance, CardError, CardSource, DECK_SIZE, Game, GameOptions, ShuffledShoe, SourceError,
    StackedDeck,
};

#[test]
fn shuffled_shoe_holds_every_card_of_every_deck() {
    let mut shoe = ShuffledShoe::new(2, 7);
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE);

    let draw = shoe.draw(2 * DECK_SIZE).unwrap();
    assert_eq!(draw.remaining, 0);

    let distinct: HashSet<_> = draw.cards.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    for card in &distinct {
        assert_eq!(draw.cards.iter().filter(|c| *c == card).count(), 2);
    }
}

#[test]
fn same_seed_same_order() {
    let mut a = ShuffledShoe::new(1, 1234);
    let mut b = ShuffledShoe::new(1, 1234);
    let mut c = ShuffledShoe::new(1, 4321);

    let first = a.draw(10).unwrap().cards;
    assert_eq!(first, b.draw(10).unwrap().cards);
    assert_ne!(first, c.draw(10).unwrap().cards);
}

#[test]
fn overdraw_is_refused_without_consuming_cards() {
    let mut shoe = ShuffledShoe::new(1, 3);
    shoe.draw(50).unwrap();

    assert_eq!(
        shoe.draw(3).unwrap_err(),
        SourceError::NotEnoughCards {
            requested: 3,
            remaining: 2,
        }
    );
    assert_eq!(shoe.remaining(), 2);
    assert_eq!(shoe.draw(2).unwrap().remaining, 0);
}

#[test]
fn stacked_deck_deals_front_to_back() {
    let mut deck = StackedDeck::from_codes(&["AS", "0H", "5C", "KD"]).unwrap();

    let first = deck.draw(1).unwrap();
    assert_eq!(first.cards[0].to_string(), "AS");
    assert_eq!(first.remaining, 3);

    let rest = deck.draw(3).unwrap();
    let codes: Vec<String> = rest.cards.iter().map(ToString::to_string).collect();
    assert_eq!(codes, ["0H", "5C", "KD"]);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn stacked_deck_rejects_bad_codes() {
    assert_eq!(
        StackedDeck::from_codes(&["AS", "ZZ"]).unwrap_err(),
        CardError::InvalidRank('Z')
    );
}

#[test]
fn a_whole_game_runs_on_a_shuffled_shoe() {
    let mut game = Game::start(
        ShuffledShoe::new(1, 99),
        GameOptions::default().with_players(3).with_decks(1),
    )
    .unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 6);

    // Everyone hits once, then stands.
    loop {
        let result = game.hit().unwrap();
        let advance = if result.is_bust() {
            game.advance()
        } else {
            game.stand().unwrap()
        };
        if let Advance::Finished(_) = advance {
            break;
        }
    }

    let result = game.showdown();
    assert_eq!(result.players.len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 9);
    for player in &result.players {
        assert_eq!(player.hand.len(), 3);
        assert_eq!(player.busted, player.total.value() > 21);
    }
}
