//! Hand scoring and card code tests.

use deckjack::{Card, CardError, Hand, HandTotal, Suit, score};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand(codes: &[&str]) -> Hand {
    codes.iter().map(|code| code.parse::<Card>().unwrap()).collect()
}

#[test]
fn hands_without_aces_score_plain_totals() {
    assert_eq!(hand(&["9H", "7C"]).total(), HandTotal::Total(16));
    assert_eq!(hand(&["KH", "QC", "JD"]).total(), HandTotal::Total(30));
    assert_eq!(hand(&["2H", "3C", "4D", "5S", "6H"]).total(), HandTotal::Total(20));
    assert_eq!(hand(&["0H", "KS"]).total(), HandTotal::Total(20));
}

#[test]
fn ace_with_ten_value_is_blackjack_in_either_order() {
    for codes in [["AS", "0H"], ["0H", "AS"], ["AD", "KC"], ["QS", "AH"], ["JD", "AC"]] {
        let hand = hand(&codes);
        assert_eq!(hand.total(), HandTotal::Blackjack, "{codes:?}");
        assert_eq!(hand.value(), 21);
        assert!(hand.is_blackjack());
    }
}

#[test]
fn two_aces_and_nine_is_soft_twenty_one() {
    let hand = hand(&["AS", "AH", "9C"]);
    assert_eq!(hand.total(), HandTotal::Soft(21));
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());
}

#[test]
fn three_aces_and_nine_demote_every_ace() {
    assert_eq!(
        score(&[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 9),
        ]),
        HandTotal::Hard(12)
    );
}

#[test]
fn soft_and_hard_totals() {
    assert_eq!(hand(&["AS", "6H"]).total(), HandTotal::Soft(17));
    assert_eq!(hand(&["AS", "AH"]).total(), HandTotal::Soft(12));
    assert_eq!(hand(&["AS", "6H", "9C"]).total(), HandTotal::Hard(16));
    assert_eq!(hand(&["AS", "5H", "5C"]).total(), HandTotal::Soft(21));
    assert_eq!(hand(&["AS", "9H", "KC", "5D"]).total(), HandTotal::Hard(25));
}

#[test]
fn bust_is_over_twenty_one_after_demotion() {
    assert!(hand(&["KS", "QH", "2C"]).is_bust());
    assert!(hand(&["AS", "9H", "KC", "5D"]).is_bust());
    assert!(!hand(&["AS", "AH", "AC", "9D"]).is_bust());
}

#[test]
fn long_hands_keep_their_exact_total() {
    let aces = vec![card(Suit::Spades, 1); 30];
    assert_eq!(score(&aces), HandTotal::Hard(30));
    let hand: Hand = aces.into_iter().collect();
    assert!(hand.is_bust());
    assert!(!hand.is_soft());

    let kings = vec![card(Suit::Hearts, 13); 26];
    assert_eq!(score(&kings), HandTotal::Total(260));
    assert!(score(&kings).is_bust());
}

#[test]
fn tagged_total_display() {
    assert_eq!(HandTotal::Total(18).to_string(), "18");
    assert_eq!(HandTotal::Soft(17).to_string(), "soft 17");
    assert_eq!(HandTotal::Hard(12).to_string(), "hard 12");
    assert_eq!(HandTotal::Blackjack.to_string(), "blackjack");
    assert_eq!(HandTotal::Blackjack.value(), 21);
}

#[test]
fn card_codes_round_trip_through_display() {
    assert_eq!("AS".parse::<Card>().unwrap(), card(Suit::Spades, 1));
    assert_eq!("0H".parse::<Card>().unwrap(), card(Suit::Hearts, 10));
    assert_eq!("kd".parse::<Card>().unwrap(), card(Suit::Diamonds, 13));
    assert_eq!("10C".parse::<Card>().unwrap(), card(Suit::Clubs, 10));
    assert_eq!("TC".parse::<Card>().unwrap(), card(Suit::Clubs, 10));
    assert_eq!(card(Suit::Hearts, 10).to_string(), "0H");
    assert_eq!(card(Suit::Clubs, 7).to_string(), "7C");
}

#[test]
fn malformed_card_codes_are_rejected() {
    assert_eq!("".parse::<Card>().unwrap_err(), CardError::InvalidLength(0));
    assert_eq!("AHS".parse::<Card>().unwrap_err(), CardError::InvalidLength(3));
    assert_eq!("1H".parse::<Card>().unwrap_err(), CardError::InvalidRank('1'));
    assert_eq!("AX".parse::<Card>().unwrap_err(), CardError::InvalidSuit('X'));
}

#[test]
fn hand_display_lists_codes() {
    assert_eq!(hand(&["AS", "0H", "5C"]).to_string(), "[AS, 0H, 5C]");
    assert_eq!(Hand::new().to_string(), "[]");
}
