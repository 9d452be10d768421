mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

use crate::error::Result;
use crate::model::{
    ballot::BallotPaper, candidate::Candidate, position::Position, voter::Credential,
};

/// The persistence seam every core operation works through.
///
/// A handle is passed into each operation explicitly; the core holds no
/// process-wide connection state. All methods are single-statement against
/// the backing store, and [`upsert_ballot`](ElectionStore::upsert_ballot) is
/// atomic, which is the only concurrency primitive the election logic needs.
#[rocket::async_trait]
pub trait ElectionStore: Send + Sync {
    /// The stored credential for a voter, if that voter exists. The voter
    /// roll is read-only from the core's point of view.
    async fn voter_credential(&self, voter_id: &str) -> Result<Option<Credential>>;

    /// Every candidate registered for a position, in store order.
    async fn candidates_for(&self, position: Position) -> Result<Vec<Candidate>>;

    /// Append one candidate row. Duplicate `(position, name)` rows are
    /// permitted; policy lives above this seam.
    async fn insert_candidate(&self, candidate: &Candidate) -> Result<()>;

    /// Delete every candidate matching `(position, name)`; returns the number
    /// of rows removed (possibly zero).
    async fn remove_candidates(&self, position: Position, name: &str) -> Result<u64>;

    /// Insert-or-replace the voter's single ballot in one atomic statement,
    /// keyed by voter id. Never a read-modify-write.
    async fn upsert_ballot(&self, ballot: &BallotPaper) -> Result<()>;

    /// A point-in-time snapshot of all ballots committed so far.
    async fn ballots(&self) -> Result<Vec<BallotPaper>>;
}
