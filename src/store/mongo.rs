use std::ops::Deref;

use log::debug;
use mongodb::{
    bson::doc, error::Error as DbError, options::ReplaceOptions, Client, Collection, Database,
    IndexModel,
};
use rocket::futures::TryStreamExt;

use crate::error::Result;
use crate::model::{
    ballot::BallotPaper, candidate::Candidate, position::Position, voter::Credential, voter::Voter,
};

use super::ElectionStore;

/// A type that can be directly inserted/read to/from the database.
pub trait MongoCollection {
    /// The name of the collection.
    const NAME: &'static str;
}

impl MongoCollection for Voter {
    const NAME: &'static str = "voters";
}

impl MongoCollection for Candidate {
    const NAME: &'static str = "candidates";
}

impl MongoCollection for BallotPaper {
    const NAME: &'static str = "ballots";
}

/// A database collection of the given type.
struct Coll<T>(Collection<T>);

impl<T> Coll<T>
where
    T: MongoCollection,
{
    /// Get a handle on this collection in the given database.
    fn from_db(db: &Database) -> Self {
        Self(db.collection(T::NAME))
    }
}

impl<T> Deref for Coll<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The MongoDB-backed election store.
///
/// One handle per process is plenty; the driver pools connections
/// internally, and every trait method is a single statement, so the store's
/// own atomicity guarantees carry the election invariants.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to the database at `uri` and bootstrap the indexes.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        ensure_indexes_exist(&db).await?;
        Ok(Self { db })
    }

    fn coll<T: MongoCollection>(&self) -> Coll<T> {
        Coll::from_db(&self.db)
    }
}

/// Ensure that all the required indexes exist on the given database.
///
/// This operation is idempotent. The candidates index is deliberately not
/// unique: duplicate registrations are permitted rows, and removal deletes
/// all of them at once.
async fn ensure_indexes_exist(db: &Database) -> std::result::Result<(), DbError> {
    debug!("Ensuring collection indexes exist");

    let candidate_index = IndexModel::builder()
        .keys(doc! {"position": 1, "name": 1})
        .build();
    Coll::<Candidate>::from_db(db)
        .create_index(candidate_index, None)
        .await?;

    Ok(())
}

#[rocket::async_trait]
impl ElectionStore for MongoStore {
    async fn voter_credential(&self, voter_id: &str) -> Result<Option<Credential>> {
        let voter = self
            .coll::<Voter>()
            .find_one(doc! {"_id": voter_id}, None)
            .await?;
        Ok(voter.map(|v| v.passcode_hash))
    }

    async fn candidates_for(&self, position: Position) -> Result<Vec<Candidate>> {
        let candidates = self
            .coll::<Candidate>()
            .find(doc! {"position": position}, None)
            .await?
            .try_collect()
            .await?;
        Ok(candidates)
    }

    async fn insert_candidate(&self, candidate: &Candidate) -> Result<()> {
        self.coll::<Candidate>().insert_one(candidate, None).await?;
        Ok(())
    }

    async fn remove_candidates(&self, position: Position, name: &str) -> Result<u64> {
        let result = self
            .coll::<Candidate>()
            .delete_many(doc! {"position": position, "name": name}, None)
            .await?;
        Ok(result.deleted_count)
    }

    async fn upsert_ballot(&self, ballot: &BallotPaper) -> Result<()> {
        self.coll::<BallotPaper>()
            .replace_one(
                doc! {"_id": &ballot.voter_id},
                ballot,
                ReplaceOptions::builder().upsert(true).build(),
            )
            .await?;
        Ok(())
    }

    async fn ballots(&self) -> Result<Vec<BallotPaper>> {
        let ballots = self
            .coll::<BallotPaper>()
            .find(None, None)
            .await?
            .try_collect()
            .await?;
        Ok(ballots)
    }
}
