//! Actor award records and the award-count bucketing rules

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ActorAwardId, ActorId};

/// One row of the actor award table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorAward {
    pub actor_award_id: ActorAwardId,
    #[serde(default)]
    pub actor_id: Option<ActorId>,
    pub first_name: String,
    pub last_name: String,
    /// Free text, comma separated award names
    #[serde(default)]
    pub awards: Option<String>,
}

impl ActorAward {
    pub fn new(actor_award_id: ActorAwardId, actor_id: Option<ActorId>, awards: Option<&str>) -> Self {
        Self {
            actor_award_id,
            actor_id,
            first_name: String::new(),
            last_name: String::new(),
            awards: awards.map(str::to_string),
        }
    }
}

/// The stored value that counts as all three awards, trailing space included.
pub const THREE_AWARDS: &str = "Emmy, Oscar, Tony ";

/// The only spellings that count as two awards.
pub const TWO_AWARDS: [&str; 3] = ["Emmy, Oscar", "Emmy, Tony", "Oscar, Tony"];

/// Award-count bucket assigned to an actor award row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AwardBucket {
    #[serde(rename = "1 award")]
    One,
    #[serde(rename = "2 awards")]
    Two,
    #[serde(rename = "3 awards")]
    Three,
}

impl AwardBucket {
    /// Bucket an awards value by exact string comparison.
    ///
    /// Reordered lists ("Oscar, Emmy"), other spacing, and null all land in
    /// [`AwardBucket::One`].
    pub fn classify(awards: Option<&str>) -> Self {
        match awards {
            Some(THREE_AWARDS) => AwardBucket::Three,
            Some(value) if TWO_AWARDS.contains(&value) => AwardBucket::Two,
            _ => AwardBucket::One,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AwardBucket::One => "1 award",
            AwardBucket::Two => "2 awards",
            AwardBucket::Three => "3 awards",
        }
    }
}

impl fmt::Display for AwardBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
