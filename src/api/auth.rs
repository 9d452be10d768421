use rocket::{serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::voter;
use crate::store::ElectionStore;

pub fn routes() -> Vec<Route> {
    routes![authenticate]
}

/// Credentials supplied with every mutating call. There is no session token;
/// each operation authenticates independently.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterCredentials {
    pub voter_id: String,
    pub passcode: String,
}

/// Check a voter's credentials without side effects, so front ends can gate
/// their forms before collecting a registration or a ballot.
#[post("/auth", data = "<credentials>", format = "json")]
async fn authenticate(
    credentials: Json<VoterCredentials>,
    store: &State<Box<dyn ElectionStore>>,
) -> Result<()> {
    voter::authenticate(
        store.inner().as_ref(),
        &credentials.voter_id,
        &credentials.passcode,
    )
    .await
}
