use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::ElectionStore;

/// An encoded, salted argon2 hash of a voter passcode.
///
/// Passcodes are never stored in the clear; verification is delegated to
/// argon2, which compares in constant time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Hash a passcode with a fresh random salt. This is the form the
    /// provisioning tooling writes into the voter roll.
    pub fn hash<T: AsRef<[u8]>>(passcode: T) -> Result<Self> {
        let salt: [u8; 16] = rand::random();
        let encoded = argon2::hash_encoded(passcode.as_ref(), &salt, &argon2::Config::default())?;
        Ok(Self(encoded))
    }

    /// Check whether the given passcode matches this credential.
    pub fn verify<T: AsRef<[u8]>>(&self, passcode: T) -> bool {
        argon2::verify_encoded(&self.0, passcode.as_ref()).unwrap_or(false)
    }
}

/// A pre-provisioned voter, as stored in the voter roll.
///
/// The core only ever reads voters; creating and deleting them is the
/// provisioning tooling's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique ID, e.g. a student id.
    #[serde(rename = "_id")]
    pub id: String,
    pub passcode_hash: Credential,
}

/// Verify a voter's identity ahead of a mutating operation.
///
/// No side effects. Fails with [`Error::NotFound`] if the voter does not
/// exist and [`Error::InvalidCredential`] if the passcode does not match.
pub async fn authenticate(
    store: &dyn ElectionStore,
    voter_id: &str,
    passcode: &str,
) -> Result<()> {
    let credential = store
        .voter_credential(voter_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("no voter with id {voter_id:?}")))?;
    if credential.verify(passcode) {
        Ok(())
    } else {
        Err(Error::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn verify_accepts_the_hashed_passcode() {
        let credential = Credential::hash("password7").unwrap();
        assert!(credential.verify("password7"));
        assert!(!credential.verify("password8"));
        assert!(!credential.verify(""));
    }

    #[test]
    fn hashes_are_salted() {
        let first = Credential::hash("password7").unwrap();
        let second = Credential::hash("password7").unwrap();
        assert_ne!(first, second);
    }

    #[rocket::async_test]
    async fn authenticate_correct_pair() {
        let store = MemoryStore::default();
        store.add_voter("7", "password7");
        assert!(authenticate(&store, "7", "password7").await.is_ok());
    }

    #[rocket::async_test]
    async fn authenticate_wrong_passcode() {
        let store = MemoryStore::default();
        store.add_voter("7", "password7");
        let err = authenticate(&store, "7", "letmein").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredential));
    }

    #[rocket::async_test]
    async fn authenticate_unknown_voter() {
        let store = MemoryStore::default();
        let err = authenticate(&store, "404", "password").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
