use crate::collection::CardCollection;
use crate::hand::{calculate_points, is_busted, BUST_LIMIT};
use crate::table::TableIo;
use serde::{Deserialize, Serialize};

/// A robot (the dealer included) draws until reaching this total.
pub const STAND_THRESHOLD: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Robot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub hand: CardCollection,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
            hand: CardCollection::new(),
        }
    }

    pub fn robot(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Robot,
            hand: CardCollection::new(),
        }
    }

    pub fn points(&self) -> u32 {
        calculate_points(self.hand.cards())
    }

    pub fn is_busted(&self) -> bool {
        is_busted(self.hand.cards())
    }

    /// Decide whether to draw another card. Total for any hand state: robots
    /// apply the threshold rule without I/O, humans are prompted unless the
    /// hand is already busted, in which case the stand is forced.
    pub fn wants_hit(&self, io: &mut dyn TableIo) -> bool {
        match self.kind {
            PlayerKind::Robot => self.points() < STAND_THRESHOLD,
            PlayerKind::Human => {
                if self.points() > BUST_LIMIT {
                    false
                } else {
                    io.hit_or_stand(self)
                }
            }
        }
    }
}

pub fn generate_humans(names: &[String]) -> Vec<Player> {
    names.iter().map(|name| Player::human(name.as_str())).collect()
}

/// Robots are named robot0, robot1, ... in seating order.
pub fn generate_robots(count: usize) -> Vec<Player> {
    (0..count).map(|i| Player::robot(format!("robot{i}"))).collect()
}
