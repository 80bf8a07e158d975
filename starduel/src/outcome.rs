use crate::health::Health;
use crate::ship::Side;

// Match lifecycle: Playing until someone runs out of health, then the winner banner holds for a
// fixed number of ticks before the match resets itself in place.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Playing,
    Finished { winner: Side, ticks_left: u32 },
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Phase::Playing => None,
            Phase::Finished { winner, .. } => Some(*winner),
        }
    }
}

// Decide who won, if anyone.
//
// If both ships go down on the same tick yellow takes it: a defeated red always hands the win to
// yellow. Running both checks in sequence and letting the yellow one overwrite the result would
// give red the tie instead, so red is checked first and the yellow check only runs otherwise.
pub fn decide_winner(yellow: &Health, red: &Health) -> Option<Side> {
    if red.is_defeated() {
        Some(Side::Yellow)
    } else if yellow.is_defeated() {
        Some(Side::Red)
    } else {
        None
    }
}

pub fn banner_text(winner: Side) -> String {
    format!("{} Wins!", winner.label())
}
