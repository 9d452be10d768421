use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::model::{
    ballot::BallotPaper, candidate::Candidate, position::Position, voter::Credential,
};

use super::ElectionStore;

/// A hermetic [`ElectionStore`] for tests: the same observable semantics as
/// the MongoDB store, over mutex-guarded maps. Clones share state, so a test
/// can keep a handle while the rocket under test owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    voters: HashMap<String, Credential>,
    candidates: Vec<Candidate>,
    // Keyed by voter id, so one ballot per voter is structural here too.
    ballots: BTreeMap<String, BallotPaper>,
}

impl MemoryStore {
    /// Provision a voter with a hashed passcode, as the external tooling would.
    pub fn add_voter(&self, id: &str, passcode: &str) {
        let credential = Credential::hash(passcode).expect("hashing cannot fail");
        self.inner
            .lock()
            .unwrap()
            .voters
            .insert(id.to_string(), credential);
    }

    /// Seed a candidate row directly, bypassing registration.
    pub fn add_candidate(&self, candidate: Candidate) {
        self.inner.lock().unwrap().candidates.push(candidate);
    }
}

#[rocket::async_trait]
impl ElectionStore for MemoryStore {
    async fn voter_credential(&self, voter_id: &str) -> Result<Option<Credential>> {
        Ok(self.inner.lock().unwrap().voters.get(voter_id).cloned())
    }

    async fn candidates_for(&self, position: Position) -> Result<Vec<Candidate>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .candidates
            .iter()
            .filter(|candidate| candidate.position == position)
            .cloned()
            .collect())
    }

    async fn insert_candidate(&self, candidate: &Candidate) -> Result<()> {
        self.inner.lock().unwrap().candidates.push(candidate.clone());
        Ok(())
    }

    async fn remove_candidates(&self, position: Position, name: &str) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.candidates.len();
        inner
            .candidates
            .retain(|candidate| !(candidate.position == position && candidate.name == name));
        Ok((before - inner.candidates.len()) as u64)
    }

    async fn upsert_ballot(&self, ballot: &BallotPaper) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .ballots
            .insert(ballot.voter_id.clone(), ballot.clone());
        Ok(())
    }

    async fn ballots(&self) -> Result<Vec<BallotPaper>> {
        Ok(self.inner.lock().unwrap().ballots.values().cloned().collect())
    }
}
