use rocket::{serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{
    candidate::{self, Candidate},
    position::Position,
    voter,
};
use crate::store::ElectionStore;

use super::auth::VoterCredentials;

pub fn routes() -> Vec<Route> {
    routes![positions, list_candidates, register_candidate, remove_candidate]
}

/// The fixed choice set of contested positions, for front ends to render.
#[get("/positions")]
fn positions() -> Json<Vec<&'static str>> {
    Json(Position::ALL.iter().map(|position| position.label()).collect())
}

/// Candidate names for one position, used to populate ballot choices.
#[get("/positions/<position>/candidates")]
async fn list_candidates(
    position: Position,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<Json<Vec<String>>> {
    candidate::list_candidates(store.inner().as_ref(), position)
        .await
        .map(Json)
}

/// Register the calling voter as a candidate for the position. Requires
/// their credentials; the new roster row carries their id as name.
#[post("/positions/<position>/candidates", data = "<credentials>", format = "json")]
async fn register_candidate(
    position: Position,
    credentials: Json<VoterCredentials>,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<Json<Candidate>> {
    let store = store.inner().as_ref();
    voter::authenticate(store, &credentials.voter_id, &credentials.passcode).await?;
    candidate::register_candidate(store, position, &credentials.voter_id)
        .await
        .map(Json)
}

/// How many roster rows an operator removal deleted.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedCandidates {
    pub removed: u64,
}

/// Operator removal of a candidacy; deletes every row matching the name.
#[delete("/positions/<position>/candidates?<name>")]
async fn remove_candidate(
    position: Position,
    name: String,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<Json<RemovedCandidates>> {
    let removed = candidate::remove_candidate(store.inner().as_ref(), position, &name).await?;
    Ok(Json(RemovedCandidates { removed }))
}
