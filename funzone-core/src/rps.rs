use funzone_types::{GameKind, OutcomeKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A rock-paper-scissors hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The hand this one defeats.
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn random() -> Choice {
        let mut rng = rand::thread_rng();
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        };
        write!(f, "{name}")
    }
}

/// One finished round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpsRound {
    pub player: Choice,
    pub computer: Choice,
    pub result: OutcomeKind,
}

impl RpsRound {
    /// Flat award for the round: 50 per win, nothing otherwise.
    pub fn score_awarded(&self) -> u32 {
        match self.result {
            OutcomeKind::Win => GameKind::RockPaperScissors
                .flat_win_award()
                .unwrap_or_default(),
            _ => 0,
        }
    }
}

pub fn determine_winner(player: Choice, computer: Choice) -> OutcomeKind {
    if player == computer {
        OutcomeKind::Draw
    } else if player.beats() == computer {
        OutcomeKind::Win
    } else {
        OutcomeKind::Lose
    }
}

/// Play one round against a uniformly random computer hand.
pub fn play_round(player: Choice) -> RpsRound {
    let computer = Choice::random();
    RpsRound {
        player,
        computer,
        result: determine_winner(player, computer),
    }
}
