use crate::collection::CardCollection;
use crate::error::Error;
use crate::hand::BUST_LIMIT;
use crate::player::Player;
use crate::table::TableIo;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cards dealt to every seat at the start of a round.
pub const INITIAL_HAND_SIZE: usize = 2;

// Shoe sizing allowance per seat.
const CARDS_PER_SEAT: usize = 11;
const PACK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
}

/// One player's line in the round summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub points: u32,
    pub outcome: HandOutcome,
}

/// One dealer, an ordered list of players, and the shared shoe. The
/// controller owns all three; players only ever see the shoe through the
/// cards dealt to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    dealer: Player,
    players: Vec<Player>,
    deck: CardCollection,
}

impl Game {
    pub fn new(dealer: Player, players: Vec<Player>) -> Result<Self, Error> {
        if players.is_empty() {
            return Err(Error::NoPlayers);
        }

        Ok(Self {
            dealer,
            players,
            deck: CardCollection::new(),
        })
    }

    /// Dealer plus everyone else at the table.
    pub fn num_players(&self) -> usize {
        1 + self.players.len()
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Play one full round: fresh shoe, deal, every player's turn in seating
    /// order with the dealer last, then scoring. Returns one result per
    /// non-dealer player, in seating order.
    pub fn play_round<R: Rng>(
        &mut self,
        rng: &mut R,
        io: &mut dyn TableIo,
    ) -> Result<Vec<PlayerResult>, Error> {
        self.rebuild_deck(rng);
        self.deal()?;

        for i in 0..self.players.len() {
            run_turn(&mut self.players[i], &mut self.deck, io)?;
        }

        // Reveal the hole card before the dealer draws.
        self.dealer.hand.flip_card(0)?;
        run_turn(&mut self.dealer, &mut self.deck, io)?;

        Ok(self.evaluate())
    }

    /// The shoe is rebuilt from fresh packs every round, sized at eleven
    /// cards per seat rounded up to whole packs.
    fn rebuild_deck<R: Rng>(&mut self, rng: &mut R) {
        self.deck.clear();

        let packs = 1 + self.num_players() * CARDS_PER_SEAT / PACK_SIZE;
        for _ in 0..packs {
            self.deck.add_standard_pack();
        }
        self.deck.shuffle(rng);

        log::debug!("rebuilt the shoe: {} packs, {} cards", packs, self.deck.len());
    }

    /// Clear every hand, deal two cards to each player and then to the
    /// dealer, and turn the dealer's first card face down as the hole card.
    fn deal(&mut self) -> Result<(), Error> {
        self.dealer.hand.clear();
        for player in &mut self.players {
            player.hand.clear();
        }

        for player in &mut self.players {
            for _ in 0..INITIAL_HAND_SIZE {
                player.hand.add_card(self.deck.pop_card()?);
            }
        }

        for _ in 0..INITIAL_HAND_SIZE {
            self.dealer.hand.add_card(self.deck.pop_card()?);
        }
        self.dealer.hand.flip_card(0)?;

        log::debug!(
            "dealt {} hands, {} cards left in the shoe",
            self.num_players(),
            self.deck.len()
        );
        Ok(())
    }

    /// A player beats the dealer by staying at or under the limit while the
    /// dealer busts, or by outscoring the dealer without busting. An exact
    /// tie goes to the dealer.
    fn evaluate(&self) -> Vec<PlayerResult> {
        let dealer_points = self.dealer.points();

        self.players
            .iter()
            .map(|player| {
                let points = player.points();
                let won = (dealer_points > BUST_LIMIT && points <= BUST_LIMIT)
                    || (dealer_points < points && points <= BUST_LIMIT);

                PlayerResult {
                    name: player.name.clone(),
                    points,
                    outcome: if won { HandOutcome::Win } else { HandOutcome::Loss },
                }
            })
            .collect()
    }
}

/// Drive one player's turn: show the hand, then keep drawing while the
/// player's policy asks for another card.
fn run_turn(
    player: &mut Player,
    deck: &mut CardCollection,
    io: &mut dyn TableIo,
) -> Result<(), Error> {
    io.show_status(player);

    while player.wants_hit(io) {
        player.hand.add_card(deck.pop_card()?);
        io.show_status(player);
    }

    Ok(())
}
