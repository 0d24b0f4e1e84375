use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BUST_LIMIT: u32 = 21;

/// Calculate the blackjack point total of a hand.
///
/// Every Ace starts at 11; while the total is over the limit and undemoted
/// Aces remain, one Ace at a time is dropped to 1. Stopping at the first
/// total at or under the limit gives the best score any 1/11 assignment of
/// the Aces allows. A total over the limit after demoting every Ace is a
/// bust, which is a valid score rather than an error.
pub fn calculate_points(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        total += card.value();
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > BUST_LIMIT && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_points(cards) > BUST_LIMIT
}
