use crate::card::{Card, Rank, Suit};
use crate::error::Error;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered pile of cards. The deck and every hand at the table are
/// instances of this one type; insertion order is deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Appends one freshly ordered 52-card pack (13 ranks x 4 suits).
    pub fn add_standard_pack(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Removes and returns the last card, which models dealing from the top
    /// of a shuffled deck.
    pub fn pop_card(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::EmptyCollection)
    }

    pub fn flip_card(&mut self, index: usize) -> Result<(), Error> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        card.flip();
        Ok(())
    }

    /// Uniform random permutation of the current contents.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn to_display(&self) -> String {
        self.cards
            .iter()
            .map(|card| card.to_display())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pop_card_is_lifo() {
        let mut pile = CardCollection::new();
        pile.add_card(Card::new(Suit::Hearts, Rank::Two));
        pile.add_card(Card::new(Suit::Hearts, Rank::Three));

        assert_eq!(pile.pop_card().unwrap().rank(), Rank::Three);
        assert_eq!(pile.pop_card().unwrap().rank(), Rank::Two);
    }

    #[test]
    fn test_pop_card_empty_fails() {
        let mut pile = CardCollection::new();
        assert_eq!(pile.pop_card().unwrap_err(), Error::EmptyCollection);
    }

    #[test]
    fn test_flip_card_out_of_range_fails() {
        let mut pile = CardCollection::new();
        pile.add_card(Card::new(Suit::Spades, Rank::Ace));

        assert_eq!(
            pile.flip_card(1).unwrap_err(),
            Error::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_flip_card_toggles_in_place() {
        let mut pile = CardCollection::new();
        pile.add_card(Card::new(Suit::Spades, Rank::Ace));

        pile.flip_card(0).unwrap();
        assert!(!pile.cards()[0].is_face_up());
        pile.flip_card(0).unwrap();
        assert!(pile.cards()[0].is_face_up());
    }

    #[test]
    fn test_standard_pack_has_52_distinct_cards() {
        let mut deck = CardCollection::new();
        deck.add_standard_pack();

        assert_eq!(deck.len(), 52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(deck
                    .cards()
                    .iter()
                    .any(|c| c.suit() == suit && c.rank() == rank));
            }
        }
    }

    #[test]
    fn test_shuffle_keeps_the_same_cards() {
        let mut deck = CardCollection::new();
        deck.add_standard_pack();
        let before = deck.clone();

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));

        assert_eq!(deck.len(), 52);
        for card in before.cards() {
            assert!(deck.cards().contains(card));
        }
    }

    #[test]
    fn test_shuffle_is_reproducible_from_a_seed() {
        let mut first = CardCollection::new();
        first.add_standard_pack();
        let mut second = first.clone();

        first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
        second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_empties_the_collection() {
        let mut pile = CardCollection::new();
        pile.add_standard_pack();
        pile.clear();
        assert!(pile.is_empty());
    }
}
