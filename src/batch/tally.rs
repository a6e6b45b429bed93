use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a record took the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::FirstWins => write!(f, "player 1 wins"),
            Verdict::SecondWins => write!(f, "player 2 wins"),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}

/// Win/tie counts accumulated over a batch run. The runner threads this
/// through as a value; `record` returns the updated tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub first_wins: u32,
    pub second_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(mut self, verdict: Verdict) -> Self {
        match verdict {
            Verdict::FirstWins => self.first_wins += 1,
            Verdict::SecondWins => self.second_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
        self
    }

    pub fn records(&self) -> u32 {
        self.first_wins + self.second_wins + self.ties
    }
}
