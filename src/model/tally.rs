use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::ballot::BallotPaper;
use crate::model::position::Position;
use crate::store::ElectionStore;

/// One candidate's vote count within a position tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTotal {
    pub name: String,
    pub votes: u64,
}

/// The derived result for one position: every candidate named on at least one
/// ballot, with their counts. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionTally {
    pub position: Position,
    pub totals: Vec<CandidateTotal>,
}

/// Group the given ballots by their selection for `position` and count the
/// non-null occurrences. Totals are ordered by votes descending, then name
/// ascending, so equal counts have a stable order.
fn count_selections(ballots: &[BallotPaper], position: Position) -> Vec<CandidateTotal> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for ballot in ballots {
        if let Some(name) = ballot.selections.get(position) {
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut totals: Vec<CandidateTotal> = counts
        .into_iter()
        .map(|(name, votes)| CandidateTotal {
            name: name.to_string(),
            votes,
        })
        .collect();
    totals.sort_by(|a, b| b.votes.cmp(&a.votes).then_with(|| a.name.cmp(&b.name)));
    totals
}

/// Tally one position from the ballots committed at the time of the read.
pub async fn position_tally(
    store: &dyn ElectionStore,
    position: Position,
) -> Result<PositionTally> {
    let ballots = store.ballots().await?;
    Ok(PositionTally {
        position,
        totals: count_selections(&ballots, position),
    })
}

/// Tally every position, in the fixed reporting order, from a single ballot
/// snapshot.
pub async fn full_tally(store: &dyn ElectionStore) -> Result<Vec<PositionTally>> {
    let ballots = store.ballots().await?;
    Ok(Position::ALL
        .into_iter()
        .map(|position| PositionTally {
            position,
            totals: count_selections(&ballots, position),
        })
        .collect())
}
