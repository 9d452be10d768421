use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::position::Position;
use crate::store::ElectionStore;

/// A voter's choice for each of the six positions. `None` is an abstention
/// and is stored as null, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default)]
    pub head_boy: Option<String>,
    #[serde(default)]
    pub head_girl: Option<String>,
    #[serde(default)]
    pub cul_sec_boy: Option<String>,
    #[serde(default)]
    pub cul_sec_girl: Option<String>,
    #[serde(default)]
    pub sports_sec_boy: Option<String>,
    #[serde(default)]
    pub sports_sec_girl: Option<String>,
}

impl Selections {
    /// The choice recorded for one position, if any.
    pub fn get(&self, position: Position) -> Option<&str> {
        let field = match position {
            Position::HeadBoy => &self.head_boy,
            Position::HeadGirl => &self.head_girl,
            Position::CulSecBoy => &self.cul_sec_boy,
            Position::CulSecGirl => &self.cul_sec_girl,
            Position::SportsSecBoy => &self.sports_sec_boy,
            Position::SportsSecGirl => &self.sports_sec_girl,
        };
        field.as_deref()
    }

    /// Record a choice (or an abstention) for one position.
    pub fn set(&mut self, position: Position, choice: Option<String>) {
        let field = match position {
            Position::HeadBoy => &mut self.head_boy,
            Position::HeadGirl => &mut self.head_girl,
            Position::CulSecBoy => &mut self.cul_sec_boy,
            Position::CulSecGirl => &mut self.cul_sec_girl,
            Position::SportsSecBoy => &mut self.sports_sec_boy,
            Position::SportsSecGirl => &mut self.sports_sec_girl,
        };
        *field = choice;
    }

    /// Every non-abstained `(position, candidate name)` pair, in the fixed
    /// position order.
    pub fn chosen(&self) -> impl Iterator<Item = (Position, &str)> {
        Position::ALL
            .into_iter()
            .filter_map(|position| self.get(position).map(|name| (position, name)))
    }
}

/// One voter's ballot: the single document keyed by their id. There is never
/// more than one per voter; re-casting replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotPaper {
    #[serde(rename = "_id")]
    pub voter_id: String,
    #[serde(flatten)]
    pub selections: Selections,
}

/// Cast (or re-cast) the authenticated voter's ballot.
///
/// Each non-abstain selection must name a candidate currently registered for
/// that position; otherwise the cast fails with [`Error::NotFound`] before
/// anything is written, leaving any previous ballot untouched. The write
/// itself is a single atomic upsert overwriting all six fields, so a
/// concurrent resubmission by the same voter cannot interleave into a mixed
/// ballot.
pub async fn cast_ballot(
    store: &dyn ElectionStore,
    voter_id: &str,
    selections: Selections,
) -> Result<()> {
    for (position, name) in selections.chosen() {
        let roster = store.candidates_for(position).await?;
        if !roster.iter().any(|candidate| candidate.name == name) {
            return Err(Error::NotFound(format!(
                "no candidate {name:?} registered for {position}"
            )));
        }
    }

    let ballot = BallotPaper {
        voter_id: voter_id.to_string(),
        selections,
    };
    store.upsert_ballot(&ballot).await?;
    info!("recorded ballot for voter {voter_id}");
    Ok(())
}
