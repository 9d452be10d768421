use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::position::Position;
use crate::store::ElectionStore;

/// Achievements text given to every fresh registration, before the records
/// office fills in anything real.
pub const REGISTERED_ACHIEVEMENTS: &str = "Registered as candidate";

/// A contestant for a single position. Identity is `(position, name)`;
/// the same name may contest different positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub position: Position,
    pub name: String,
    pub avg_marks: f64,
    pub achievements: String,
}

impl Candidate {
    /// A freshly registered candidate with no marks on record.
    pub fn registered(position: Position, name: String) -> Self {
        Self {
            position,
            name,
            avg_marks: 0.0,
            achievements: REGISTERED_ACHIEVEMENTS.to_string(),
        }
    }
}

/// Candidate names for a position, in store order. Empty if nobody has
/// registered; never an error.
pub async fn list_candidates(store: &dyn ElectionStore, position: Position) -> Result<Vec<String>> {
    let candidates = store.candidates_for(position).await?;
    Ok(candidates.into_iter().map(|c| c.name).collect())
}

/// Register the authenticated voter as a candidate for `position`.
///
/// The voter's id becomes the candidate name. A repeat registration appends
/// a second row rather than failing; rosters are not deduplicated.
pub async fn register_candidate(
    store: &dyn ElectionStore,
    position: Position,
    voter_id: &str,
) -> Result<Candidate> {
    let candidate = Candidate::registered(position, voter_id.to_string());
    store.insert_candidate(&candidate).await?;
    info!("voter {voter_id} registered as a candidate for {position}");
    Ok(candidate)
}

/// Withdraw a candidacy: delete every row matching `(position, name)` and
/// report how many were removed. Fails with [`Error::NotFound`] if none match.
pub async fn remove_candidate(
    store: &dyn ElectionStore,
    position: Position,
    name: &str,
) -> Result<u64> {
    let removed = store.remove_candidates(position, name).await?;
    if removed == 0 {
        return Err(Error::NotFound(format!(
            "no candidate {name:?} registered for {position}"
        )));
    }
    info!("removed {removed} candidate row(s) for {name} ({position})");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[rocket::async_test]
    async fn registration_inserts_a_zero_marks_row() {
        let store = MemoryStore::default();
        let candidate = register_candidate(&store, Position::SportsSecBoy, "99")
            .await
            .unwrap();
        assert_eq!("99", candidate.name);
        assert_eq!(0.0, candidate.avg_marks);
        assert_eq!(REGISTERED_ACHIEVEMENTS, candidate.achievements);

        let names = list_candidates(&store, Position::SportsSecBoy).await.unwrap();
        assert_eq!(vec!["99".to_string()], names);
    }

    #[rocket::async_test]
    async fn listing_preserves_store_order_per_position() {
        let store = MemoryStore::default();
        store.add_candidate(Candidate::registered(
            Position::HeadBoy,
            "Arun Kumar".to_string(),
        ));
        store.add_candidate(Candidate::registered(
            Position::HeadGirl,
            "Meena Devi".to_string(),
        ));
        store.add_candidate(Candidate::registered(
            Position::HeadBoy,
            "Karthik Raja".to_string(),
        ));

        let names = list_candidates(&store, Position::HeadBoy).await.unwrap();
        assert_eq!(
            vec!["Arun Kumar".to_string(), "Karthik Raja".to_string()],
            names
        );
        assert!(list_candidates(&store, Position::CulSecBoy)
            .await
            .unwrap()
            .is_empty());
    }

    #[rocket::async_test]
    async fn repeat_registration_appends_a_second_row() {
        let store = MemoryStore::default();
        register_candidate(&store, Position::HeadBoy, "3").await.unwrap();
        register_candidate(&store, Position::HeadBoy, "3").await.unwrap();

        let names = list_candidates(&store, Position::HeadBoy).await.unwrap();
        assert_eq!(vec!["3".to_string(), "3".to_string()], names);
    }

    #[rocket::async_test]
    async fn removal_reports_the_count_and_clears_all_matches() {
        let store = MemoryStore::default();
        register_candidate(&store, Position::HeadBoy, "3").await.unwrap();
        register_candidate(&store, Position::HeadBoy, "3").await.unwrap();
        register_candidate(&store, Position::HeadGirl, "3").await.unwrap();

        let removed = remove_candidate(&store, Position::HeadBoy, "3").await.unwrap();
        assert_eq!(2, removed);
        assert!(list_candidates(&store, Position::HeadBoy).await.unwrap().is_empty());
        // The same name on another position is untouched.
        assert_eq!(
            vec!["3".to_string()],
            list_candidates(&store, Position::HeadGirl).await.unwrap()
        );
    }

    #[rocket::async_test]
    async fn removing_a_missing_candidate_is_not_found() {
        let store = MemoryStore::default();
        store.add_candidate(Candidate::registered(
            Position::HeadBoy,
            "Arun Kumar".to_string(),
        ));

        let err = remove_candidate(&store, Position::HeadBoy, "Nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        // And the roster is unchanged.
        assert_eq!(
            vec!["Arun Kumar".to_string()],
            list_candidates(&store, Position::HeadBoy).await.unwrap()
        );
    }
}
