use crate::player::Player;

/// Terminal-facing collaborator the round controller drives. The engine only
/// ever needs an explicit hit/stand answer and a place to surface table
/// state; parsing text and re-prompting on bad input stay on the client side.
pub trait TableIo {
    /// Ask a human player for one decision: `true` to hit, `false` to stand.
    fn hit_or_stand(&mut self, player: &Player) -> bool;

    /// Present a player's current hand and score.
    fn show_status(&mut self, player: &Player);
}
