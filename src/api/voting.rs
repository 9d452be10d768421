use rocket::{serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{
    ballot::{self, Selections},
    voter,
};
use crate::store::ElectionStore;

pub fn routes() -> Vec<Route> {
    routes![cast_ballot]
}

/// A complete ballot submission. Positions missing from `selections` are
/// abstentions; the whole ballot replaces whatever the voter cast before.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotSubmission {
    pub voter_id: String,
    pub passcode: String,
    #[serde(default)]
    pub selections: Selections,
}

#[post("/ballots", data = "<submission>", format = "json")]
async fn cast_ballot(
    submission: Json<BallotSubmission>,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<()> {
    let BallotSubmission {
        voter_id,
        passcode,
        selections,
    } = submission.into_inner();
    let store = store.inner().as_ref();
    voter::authenticate(store, &voter_id, &passcode).await?;
    ballot::cast_ballot(store, &voter_id, selections).await
}
